//! Per-extractor memoization of field results
//!
//! One slot per memoized field. A slot is filled the first time its field is
//! requested and never cleared; the underlying document is immutable so a
//! stored value cannot go stale. Failed computations leave the slot empty.

use once_cell::unsync::OnceCell;
use tracing::debug;

use super::ParsingResult;
use crate::domain::profile::ProfileField;

#[derive(Debug, Default)]
pub struct FieldCache {
    pub(crate) name: OnceCell<String>,
    pub(crate) skills: OnceCell<Vec<String>>,
    pub(crate) username: OnceCell<String>,
    pub(crate) location: OnceCell<Option<String>>,
    pub(crate) current_company: OnceCell<Option<String>>,
    pub(crate) all_companies: OnceCell<Vec<String>>,
    pub(crate) connection_count: OnceCell<Option<u64>>,
}

impl FieldCache {
    /// Whether `field` already has a stored value. Fields that are never
    /// memoized always report `false`.
    pub fn is_cached(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Name => self.name.get().is_some(),
            ProfileField::Skills => self.skills.get().is_some(),
            ProfileField::Username => self.username.get().is_some(),
            ProfileField::Location => self.location.get().is_some(),
            ProfileField::CurrentCompany => self.current_company.get().is_some(),
            ProfileField::AllCompanies => self.all_companies.get().is_some(),
            ProfileField::ConnectionCount => self.connection_count.get().is_some(),
            _ => false,
        }
    }

    /// Fields with a stored value, in declaration order
    pub fn cached_fields(&self) -> Vec<ProfileField> {
        [
            ProfileField::Name,
            ProfileField::Skills,
            ProfileField::Username,
            ProfileField::Location,
            ProfileField::CurrentCompany,
            ProfileField::AllCompanies,
            ProfileField::ConnectionCount,
        ]
        .into_iter()
        .filter(|field| self.is_cached(*field))
        .collect()
    }
}

/// Return the slot's value, computing and storing it first if empty
pub(crate) fn compute_if_absent<T>(
    slot: &OnceCell<T>,
    field: ProfileField,
    compute: impl FnOnce() -> T,
) -> &T {
    slot.get_or_init(|| {
        debug!(field = %field, "Computing profile field");
        compute()
    })
}

/// Fallible [`compute_if_absent`]; errors are returned and not stored
pub(crate) fn try_compute_if_absent<T>(
    slot: &OnceCell<T>,
    field: ProfileField,
    compute: impl FnOnce() -> ParsingResult<T>,
) -> ParsingResult<&T> {
    slot.get_or_try_init(|| {
        debug!(field = %field, "Computing profile field");
        compute()
    })
}
