//! Ranked route resolution over nested route trees, plus a navigation engine
//! whose transitions can be interrupted by later navigations.
//!
//! ```
//! use nuclear_navigator::Router;
//!
//! let mut router: Router<&str> = Router::new();
//! router
//!     .insert("/", "home")
//!     .insert("/groups/:groupId", "group")
//!     .insert("/groups/mine", "my-group")
//!     .nest("/dash", "dash", |dash| {
//!         dash.insert("reports", "reports");
//!     });
//!
//! let chain = router.resolve("/groups/mine");
//! assert_eq!(*chain[0].payload(), "my-group");
//!
//! let chain = router.resolve("/dash/reports");
//! let payloads: Vec<&str> = chain.iter().map(|m| *m.payload()).collect();
//! assert_eq!(payloads, ["dash", "reports"]);
//! assert_eq!(chain[1].uri(), "/dash/reports");
//! ```

#![forbid(unsafe_code)]

pub mod pattern;
pub mod router;

#[cfg(feature = "navigation")]
pub mod navigation;

pub use crate::pattern::{Pattern, PatternError, Rank};
pub use crate::router::{Match, MatchChain, Params, Route, Router};

#[cfg(feature = "navigation")]
pub use crate::navigation::{
    Action, CommitOutcome, Location, LocationSource, MemorySource, NavigateOptions,
    NavigationError, Navigator, SubscriptionId, Transition,
};
