// lottie-data: Serde structs for evaluated Lottie shape outlines
pub mod model;
