use crate::services::{push_to_array, AdminContext};
use serde_json::{json, Value};

/// Transient user-facing notifications. Every absorbed failure and every
/// completed mutation settles into exactly one entry here; presenters
/// render and drain them.
pub fn push_success(ctx: &mut AdminContext, text: &str) {
    push_to_array(
        &mut ctx.context,
        "notifications",
        json!({ "kind": "success", "text": text }),
    );
}

pub fn push_failure(ctx: &mut AdminContext, text: &str) {
    push_to_array(
        &mut ctx.context,
        "notifications",
        json!({ "kind": "error", "text": text }),
    );
}

pub fn notifications(ctx: &AdminContext) -> Vec<Value> {
    ctx.context
        .get("notifications")
        .and_then(|value| value.as_array().cloned())
        .unwrap_or_default()
}

pub fn take_notifications(ctx: &mut AdminContext) -> Vec<Value> {
    let drained = notifications(ctx);
    ctx.context.remove("notifications");
    drained
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_accumulate_in_order() {
        let mut ctx = AdminContext::default();
        push_success(&mut ctx, "Withdrawal marked as PAID");
        push_failure(&mut ctx, "Failed to load bets");
        let notes = notifications(&ctx);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0]["kind"], "success");
        assert_eq!(notes[1]["kind"], "error");
    }

    #[test]
    fn take_drains_the_queue() {
        let mut ctx = AdminContext::default();
        push_failure(&mut ctx, "Failed to load withdrawals");
        assert_eq!(take_notifications(&mut ctx).len(), 1);
        assert!(notifications(&ctx).is_empty());
    }
}
