// Repository trait for enterprise data access
use crate::domain::enterprise::Enterprise;

/// Read-only access to the enterprise dataset.
///
/// The order returned is the display order; filtering never re-sorts it.
pub trait EnterpriseRepository: Send + Sync {
    fn enterprises(&self) -> &[Enterprise];

    fn find(&self, id: u32) -> Option<&Enterprise> {
        self.enterprises().iter().find(|e| e.id == id)
    }
}
