//! Schema-driven record generation for recordsmith.
//!
//! Given a record type name, [`RecordGenerator`] asks the metadata catalog for
//! its fields and fills every eligible one with a type-appropriate value,
//! optionally creating and persisting the records its relationships point at.

pub mod cache;
pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod model;
mod resolver;
pub mod sink;
pub mod synth;

pub use cache::MetadataCache;
pub use config::{GeneratorConfig, LoggingConfig, load_config};
pub use context::GenerationContext;
pub use engine::RecordGenerator;
pub use errors::GenerationError;
pub use logging::init_tracing;
pub use model::{FieldInclusion, FieldOverrides, GenerationPolicy, GenerationStats, ReferenceDepth};
pub use sink::{InMemorySink, JsonLinesSink};
pub use synth::{SynthesisSettings, coerce_literal, synthesize, synthesize_field};
