//! Text heuristics over judge output.
//!
//! These functions read a judge's free-form text and derive structured
//! values from it. They are pure domain logic with no I/O, just pattern
//! matching, and are approximate by nature.
//!
//! # Functions
//!
//! | Function | Use Case |
//! |----------|----------|
//! | [`agreement::judge_agrees_with_architect`] | Which side the judge sided with |
//! | [`agreement::explicit_agreement`] | Explicit "I agree with the ..." phrasing |
//! | [`agreement::lexical_overlap`] | Shared significant words between two texts |
//! | [`conclusion::extract_final_response`] | Trailing conclusion of the judge text |

pub mod agreement;
pub mod conclusion;
pub mod tokens;
