pub mod analyze_image;
pub mod analyze_image_uri;
pub mod append_dictation;
