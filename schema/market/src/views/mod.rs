//! Input/Output view pairs for the market entities.
//!
//! These are the two projections of the schema written out as plain types:
//! input structs keep the id optional, hold references as bare keys, and
//! accept native-or-string dates; output structs carry a mandatory id,
//! key-or-expanded references, and canonical ISO date strings.

mod catalog;
mod link;
mod tracking;
mod user;

pub use catalog::{
    CategoryInput, CategoryKorteInput, CategoryKorteOutput, CategoryOutput, CategoryTemp,
    CategoryTempisInput, CategoryTempisOutput, OfferInput, OfferOutput, PackageInput,
    PackageOutput, ProductInput, ProductOutput, ShopInput, ShopOutput, UnitInput, UnitOutput,
};
pub use link::{DateInput, RecordLink};
pub use tracking::{
    ProjectInput, ProjectOutput, WorkInput, WorkOutput, WorkerInput, WorkerOutput,
};
pub use user::{UserInput, UserOutput};
