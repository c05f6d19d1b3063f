use crate::domain::entities::dashboard::DashboardSnapshot;

/// The provider of dashboard data. Every call hands back a complete,
/// independent snapshot.
pub trait SnapshotSource: Send + Sync {
    fn load(&self) -> DashboardSnapshot;

    /// Periodic refresh. Implementations decide which parts change; the
    /// result still replaces `previous` wholesale.
    fn refresh(&self, previous: &DashboardSnapshot) -> DashboardSnapshot;
}
