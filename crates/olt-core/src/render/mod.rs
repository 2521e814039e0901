pub mod body;
pub mod signature;

pub use body::{MAX_BODY_DEPTH, render_body, render_media_body};
pub use signature::{MAX_SIGNATURE_DEPTH, type_signature};
