mod render;
mod words;
