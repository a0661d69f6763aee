//! YouTube input handling: video ID extraction and caption retrieval.

mod transcript;
mod video_id;

pub use transcript::{
    fetch_transcript, join_segments, CaptionSegment, TranscriptSource, YtTranscriptSource,
};
pub use video_id::extract_video_id;
