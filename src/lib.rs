pub mod args;
pub mod converter;
pub mod ffmpeg;
