pub mod anki;
