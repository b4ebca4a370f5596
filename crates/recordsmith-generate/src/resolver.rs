use rand::seq::IndexedRandom;
use tracing::debug;

use recordsmith_core::{FieldDescriptor, FieldValue, RecordSubtype};

use crate::engine::RecordGenerator;
use crate::errors::GenerationError;
use crate::model::{FieldInclusion, FieldOverrides, ReferenceDepth};

impl RecordGenerator<'_> {
    /// Decide the value of a relationship field on a record of `owner_type`.
    ///
    /// Self references and shared singleton types never create records.
    /// Subtype fields are picked structurally. Anything else is created and
    /// persisted only while `depth` has levels left.
    pub(crate) fn resolve_reference(
        &mut self,
        field: &FieldDescriptor,
        owner_type: &str,
        depth: ReferenceDepth,
    ) -> Result<FieldValue, GenerationError> {
        let value = match field.primary_target() {
            None => FieldValue::Null,
            Some(target)
                if target.eq_ignore_ascii_case(owner_type) || self.config.is_singleton(target) =>
            {
                self.singleton_reference(field, target)?
            }
            Some(target) if target.eq_ignore_ascii_case(&self.config.subtype_type) => {
                self.select_subtype(owner_type)?
            }
            Some(target) => match depth.descend() {
                Some(child_depth) => self.generate_reference(target, child_depth)?,
                None => FieldValue::Null,
            },
        };

        debug!(
            record_type = %owner_type,
            field = %field.name,
            target_type = field.primary_target().unwrap_or(""),
            resolved = !value.is_null(),
            "reference resolved"
        );
        self.stats.record_reference(!value.is_null());
        Ok(value)
    }

    /// Pick an available subtype of `type_name` uniformly at random.
    ///
    /// Returns [`FieldValue::Null`] when the type is unknown or has no
    /// available subtype.
    pub fn select_subtype(&mut self, type_name: &str) -> Result<FieldValue, GenerationError> {
        let Some(type_name) = self.context.metadata_mut().resolve_name(type_name)? else {
            return Ok(FieldValue::Null);
        };
        let descriptor = self.context.metadata_mut().describe(&type_name)?;
        let available: Vec<&RecordSubtype> = descriptor
            .subtypes
            .iter()
            .filter(|subtype| subtype.available)
            .collect();

        Ok(available
            .choose(&mut *self.rng)
            .map(|subtype| FieldValue::Id(subtype.id.clone()))
            .unwrap_or(FieldValue::Null))
    }

    fn singleton_reference(
        &mut self,
        field: &FieldDescriptor,
        target: &str,
    ) -> Result<FieldValue, GenerationError> {
        if field.name.eq_ignore_ascii_case(&self.config.owner_field)
            && target.eq_ignore_ascii_case(&self.config.user_type)
        {
            return Ok(FieldValue::Id(self.context.current_user_id()?));
        }
        if target.eq_ignore_ascii_case(&self.config.profile_type) {
            return Ok(FieldValue::Id(self.context.current_profile_id()?));
        }
        Ok(FieldValue::Null)
    }

    // Children are always required-only; `depth` already accounts for them.
    fn generate_reference(
        &mut self,
        target: &str,
        depth: ReferenceDepth,
    ) -> Result<FieldValue, GenerationError> {
        let Some(record) = self.build(
            target,
            &FieldOverrides::default(),
            FieldInclusion::RequiredOnly,
            depth,
        )?
        else {
            return Ok(FieldValue::Null);
        };
        let id = self.persist(&record)?;
        Ok(FieldValue::Id(id))
    }
}
