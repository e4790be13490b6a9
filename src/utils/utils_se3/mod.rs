pub mod rotation_and_translation;
