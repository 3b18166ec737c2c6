//! 도메인 타입.

pub mod coin;
pub mod descriptor;
pub mod price;
pub mod quote;

pub use coin::Coin;
pub use descriptor::{
    Contributor, DatasetDescriptor, DescriptorField, DescriptorResource, DescriptorSchema,
    License, Source, APPROX_BYTES_PER_ROW,
};
pub use price::{PricePoint, PriceSeries};
pub use quote::CurrentQuote;
