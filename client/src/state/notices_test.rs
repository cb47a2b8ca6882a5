use fyp_supervisor::notify::NoticeLevel;

use super::*;

#[test]
fn notify_appends_to_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let notices = RwSignal::new(NoticeQueue::new());
        let notifier = SignalNotifier::new(notices, Duration::from_millis(3000));

        notifier.success("Successfully logged out");
        notifier.error("network request failed: network-error");

        let levels: Vec<NoticeLevel> = notices.with_untracked(|q| q.iter().map(|n| n.level).collect());
        assert_eq!(levels, vec![NoticeLevel::Success, NoticeLevel::Error]);
    });
}

#[test]
fn notify_after_disposal_is_ignored() {
    let owner = Owner::new();
    let notices = owner.with(|| RwSignal::new(NoticeQueue::new()));
    let notifier = SignalNotifier::new(notices, Duration::from_millis(3000));
    notices.dispose();

    notifier.success("late");
}
