// src/constants.rs
//! Operational boundaries, gathered in one place so the numbers that
//! shape a run are not scattered through call sites.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Result-page size requested from the Notion API.
///
/// 100 is the API maximum; requesting it keeps the cursor walk over a
/// database short.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Ceiling on any single Notion API request.
///
/// On expiry the request surfaces as a timeout error rather than hanging
/// the caller's screen session.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Catalog boundaries
// ---------------------------------------------------------------------------

/// How long an interactive caller should wait after the last keystroke
/// before re-running the title/tag filter.
///
/// This is a UI-facing rate limit, not a correctness requirement: the
/// filter itself is synchronous and never sleeps. Non-interactive
/// embedders can ignore it.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
///
/// This is a performance hint, not a constraint. Over-estimating wastes
/// a little memory; under-estimating causes reallocation.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing API error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
