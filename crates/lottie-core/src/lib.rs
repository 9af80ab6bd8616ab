pub mod error;
pub mod keypath;
pub mod misc;
pub mod path;

pub use error::KeyPathError;
pub use keypath::{
    resolve_key_path, KeyPath, KeyPathElement, KeyPathElementContent, KeySegment,
    ResolvedKeyPath,
};
pub use lottie_data::model::{CurveVertex, Point, ShapeData};
pub use path::{build_path, to_bez_path, PathOp, PathSink};
