//! Entitlements — 3-tier plan catalog with quota and capability gating.
//!
//! ## Tiers
//! - **Basic**: small quotas, basic analytics only
//! - **Pro**: + advanced analytics, custom reports, export, real-time sync, API access
//! - **Enterprise**: + multi-store, AI insights, white label, custom integrations; unlimited quotas
//!
//! ## Components
//! - **tier** — ordered `Tier` enum
//! - **feature** — canonical `FeatureKey` enum and `Quota`/`Entitlement` values
//! - **catalog** — the static Tier × FeatureKey table
//! - **normalizer** — loose caller input → canonical tier / feature key
//! - **resolver** — access, limits, minimum tier, upgrade prompts
//! - **usage** — quota vs current usage evaluation

pub mod catalog;
pub mod feature;
pub mod normalizer;
pub mod resolver;
pub mod tier;
pub mod usage;

pub use catalog::{entitlement, features_for_tier};
pub use feature::{Entitlement, FeatureKey, FeatureKind, Quota};
pub use normalizer::{normalize_feature_key, normalize_tier, resolve_feature};
pub use resolver::{EntitlementResolver, FeatureAccess};
pub use tier::Tier;
pub use usage::{FeatureUsageSummary, UsageEvaluation, UsageSnapshot};
