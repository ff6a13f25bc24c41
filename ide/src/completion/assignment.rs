//! Best-effort type inference from the last textual assignment.
//!
//! The search runs over the whole buffer and ignores scoping, so a same-named binding in
//! another function can win. Only literal right-hand sides are evaluated.

use analyzer::StyledToken;
use evaluator::ExpressionEvaluator;
use regex::Regex;
use tracing::debug;

/// Rewrites `token.string` to the type tag of the last value assigned to it, if that value
/// can be evaluated. Leaves the token untouched otherwise.
pub(crate) fn resolve_assignment(
    source: &str,
    token: &mut StyledToken,
    evaluator: &dyn ExpressionEvaluator,
) {
    let Some(rhs) = last_assignment(source, &token.string) else {
        return;
    };

    match evaluator.type_tag(rhs) {
        Ok(tag) => {
            debug!(name = %token.string, rhs, %tag, "inferred type from assignment");
            token.string = tag;
        }
        Err(err) => debug!(name = %token.string, rhs, %err, "assignment not evaluated"),
    }
}

/// Right-hand side of the last `name = ...` in `source`: the text between the first and second
/// `=` of the match, so `x == 1` yields an empty string.
pub(crate) fn last_assignment<'s>(source: &'s str, name: &str) -> Option<&'s str> {
    let pattern = format!(
        r"(?:\s+|^){}\s*=\s*([^(?:\r\n,;)]*)",
        regex::escape(name)
    );
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            debug!(name, %err, "assignment pattern rejected");
            return None;
        }
    };

    let found = re.find_iter(source).last()?;
    found.as_str().split('=').nth(1)
}
