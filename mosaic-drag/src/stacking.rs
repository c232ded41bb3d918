//! Stacking-order correction for renderers without per-target isolation.

use indexmap::IndexMap;
use mosaic_api::ContainerId;

use crate::host::DragHost;

/// Forces the active container's visual stack above all others, and
/// restores every saved order when no container is active.
///
/// This exists only to work around a legacy rendering engine that does not
/// isolate stacking contexts per drop target; hosts that do isolate them
/// report so and the corrector is the identity. Calls are idempotent and
/// never mutate the saved map, which is captured once at gesture start.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackingCorrector;

impl StackingCorrector {
    pub fn fix(
        &self,
        host: &mut dyn DragHost,
        active: Option<&ContainerId>,
        saved: &IndexMap<ContainerId, i32>,
    ) {
        if host.isolates_stacking() {
            return;
        }
        let top = saved.values().copied().max().unwrap_or(0) + 1;
        for (container, order) in saved {
            if Some(container) == active {
                host.set_stack_order(container, top);
            } else {
                host.set_stack_order(container, *order);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;
    use crate::primitives::Rect;

    fn cid(s: &str) -> ContainerId {
        ContainerId::new(s)
    }

    fn host_and_orders() -> (HeadlessHost, IndexMap<ContainerId, i32>) {
        let mut host = HeadlessHost::new();
        host.add_container(cid("page"), Rect::new(0.0, 0.0, 100.0, 100.0), 3);
        host.add_container(cid("sidebar"), Rect::new(100.0, 0.0, 50.0, 100.0), 7);
        host.add_container(cid("footer"), Rect::new(0.0, 100.0, 150.0, 30.0), 5);
        let saved: IndexMap<_, _> = [(cid("page"), 3), (cid("sidebar"), 7), (cid("footer"), 5)]
            .into_iter()
            .collect();
        (host, saved)
    }

    #[test]
    fn active_container_is_raised_above_all_saved_orders() {
        let (mut host, saved) = host_and_orders();
        StackingCorrector.fix(&mut host, Some(&cid("page")), &saved);
        assert!(host.stack_order(&cid("page")) > 7);
        assert_eq!(host.stack_order(&cid("sidebar")), 7);
        assert_eq!(host.stack_order(&cid("footer")), 5);
    }

    #[test]
    fn fix_is_idempotent() {
        let (mut host, saved) = host_and_orders();
        StackingCorrector.fix(&mut host, Some(&cid("sidebar")), &saved);
        let after_once: Vec<_> = ["page", "sidebar", "footer"]
            .iter()
            .map(|c| host.stack_order(&cid(c)))
            .collect();
        StackingCorrector.fix(&mut host, Some(&cid("sidebar")), &saved);
        let after_twice: Vec<_> = ["page", "sidebar", "footer"]
            .iter()
            .map(|c| host.stack_order(&cid(c)))
            .collect();
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn none_restores_the_saved_orders_exactly() {
        let (mut host, saved) = host_and_orders();
        StackingCorrector.fix(&mut host, Some(&cid("page")), &saved);
        StackingCorrector.fix(&mut host, Some(&cid("footer")), &saved);
        StackingCorrector.fix(&mut host, None, &saved);
        assert_eq!(host.stack_order(&cid("page")), 3);
        assert_eq!(host.stack_order(&cid("sidebar")), 7);
        assert_eq!(host.stack_order(&cid("footer")), 5);
    }

    #[test]
    fn isolating_host_sees_no_changes() {
        let (mut host, saved) = host_and_orders();
        host.isolates_stacking = true;
        StackingCorrector.fix(&mut host, Some(&cid("page")), &saved);
        assert_eq!(host.stack_order(&cid("page")), 3);
    }
}
