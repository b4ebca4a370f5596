use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use recordsmith_core::{FieldDescriptor, GeneratedRecord};

use crate::config::GeneratorConfig;
use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::model::{FieldInclusion, FieldOverrides, GenerationPolicy, GenerationStats, ReferenceDepth};
use crate::synth::{SynthesisSettings, synthesize_field};

/// Entry point for generating records from catalog metadata.
pub struct RecordGenerator<'a> {
    pub(crate) context: GenerationContext<'a>,
    pub(crate) config: GeneratorConfig,
    pub(crate) settings: SynthesisSettings,
    pub(crate) rng: Box<dyn RngCore + 'a>,
    pub(crate) stats: GenerationStats,
}

impl<'a> RecordGenerator<'a> {
    /// Build a generator. Uses `config.seed` when set, otherwise a freshly
    /// seeded RNG.
    pub fn new(context: GenerationContext<'a>, config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            context,
            settings: SynthesisSettings::from(&config),
            config,
            rng: Box::new(rng),
            stats: GenerationStats::default(),
        }
    }

    pub fn with_rng(mut self, rng: impl RngCore + 'a) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn context(&self) -> &GenerationContext<'a> {
        &self.context
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// An empty record of the given type, or `None` if the type is unknown.
    pub fn create_skeleton(
        &mut self,
        type_name: &str,
    ) -> Result<Option<GeneratedRecord>, GenerationError> {
        let resolved = self.context.metadata_mut().resolve_name(type_name)?;
        if resolved.is_none() {
            debug!(record_type = %type_name, "unknown record type");
        }
        Ok(resolved.map(GeneratedRecord::new))
    }

    /// A fully populated record with default synthesis for every field.
    pub fn create_full(
        &mut self,
        type_name: &str,
        required_only: bool,
        allow_recursive_references: bool,
    ) -> Result<Option<GeneratedRecord>, GenerationError> {
        self.create_with_policy(
            type_name,
            &FieldOverrides::default(),
            GenerationPolicy::new(required_only, allow_recursive_references),
        )
    }

    /// A fully populated record where `overrides` replace synthesized values.
    pub fn create_full_with_overrides(
        &mut self,
        type_name: &str,
        overrides: &FieldOverrides,
        required_only: bool,
        allow_recursive_references: bool,
    ) -> Result<Option<GeneratedRecord>, GenerationError> {
        self.create_with_policy(
            type_name,
            overrides,
            GenerationPolicy::new(required_only, allow_recursive_references),
        )
    }

    pub fn create_with_policy(
        &mut self,
        type_name: &str,
        overrides: &FieldOverrides,
        policy: GenerationPolicy,
    ) -> Result<Option<GeneratedRecord>, GenerationError> {
        let depth = ReferenceDepth::for_policy(policy, self.config.max_reference_depth);
        let record = self.build(type_name, overrides, policy.inclusion, depth)?;
        if let Some(record) = &record {
            info!(
                record_type = %record.type_name(),
                fields = record.len(),
                recursive_references = policy.recursive_references,
                "record generated"
            );
        }
        Ok(record)
    }

    /// Generate a record and store it, returning the assigned identifier.
    pub fn create_and_persist(
        &mut self,
        type_name: &str,
        overrides: &FieldOverrides,
        policy: GenerationPolicy,
    ) -> Result<Option<String>, GenerationError> {
        let Some(record) = self.create_with_policy(type_name, overrides, policy)? else {
            return Ok(None);
        };
        let id = self.persist(&record)?;
        Ok(Some(id))
    }

    /// Assemble a record of `type_name`.
    ///
    /// Mutually recursive with relationship resolution; `depth` bounds how
    /// many further levels of related records may be created.
    pub(crate) fn build(
        &mut self,
        type_name: &str,
        overrides: &FieldOverrides,
        inclusion: FieldInclusion,
        depth: ReferenceDepth,
    ) -> Result<Option<GeneratedRecord>, GenerationError> {
        let Some(type_name) = self.context.metadata_mut().resolve_name(type_name)? else {
            debug!(record_type = %type_name, "unknown record type");
            return Ok(None);
        };
        let descriptor = self.context.metadata_mut().describe(&type_name)?;
        let mut record = GeneratedRecord::new(descriptor.name.clone());

        for field in &descriptor.fields {
            if let Some(reason) = self.skip_reason(field, inclusion) {
                debug!(record_type = %descriptor.name, field = %field.name, reason, "field skipped");
                continue;
            }

            let literal = overrides.get(&field.name);
            let value = if literal.is_none() && field.kind.is_relationship() {
                self.resolve_reference(field, &descriptor.name, depth)?
            } else {
                if literal.is_some() {
                    debug!(record_type = %descriptor.name, field = %field.name, "override applied");
                    self.stats.record_override();
                } else {
                    self.stats.record_synthesized();
                }
                synthesize_field(field, literal, &self.settings, &mut *self.rng)
            };

            record.set(field.name.clone(), value);
        }

        self.stats.record_built();
        Ok(Some(record))
    }

    pub(crate) fn persist(&mut self, record: &GeneratedRecord) -> Result<String, GenerationError> {
        let id = self.context.persist(record)?;
        self.stats.record_persisted();
        info!(record_type = %record.type_name(), id = %id, "record persisted");
        Ok(id)
    }

    fn skip_reason(&self, field: &FieldDescriptor, inclusion: FieldInclusion) -> Option<&'static str> {
        if !field.settable {
            Some("not settable")
        } else if field.nillable && inclusion == FieldInclusion::RequiredOnly {
            Some("optional under required-only policy")
        } else if self.config.is_excluded(&field.name) {
            Some("excluded")
        } else {
            None
        }
    }
}
