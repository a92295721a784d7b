pub mod diarization;
pub mod grades;
pub mod transcript;
pub mod whisper;

pub use diarization::*;
pub use grades::*;
pub use transcript::*;
pub use whisper::*;
