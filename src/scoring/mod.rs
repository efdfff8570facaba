pub mod average;
pub mod extract;
pub mod normalize;
pub mod radar;
pub mod rank;

pub use average::{category_average, category_averages};
pub use extract::try_extract_number;
pub use radar::radar_series;
pub use rank::strengths_and_weaknesses;
