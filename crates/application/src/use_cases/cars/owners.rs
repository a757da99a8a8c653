use crate::ports::OwnerRepository;
use motorpool_domain::DomainError;

/// Fail with `OwnerNotFound` on the first id the repository does not know.
pub(super) async fn ensure_owners_exist(
    owner_repo: &dyn OwnerRepository,
    owner_ids: &[i64],
) -> Result<(), DomainError> {
    for &owner_id in owner_ids {
        owner_repo
            .get_by_id(owner_id)
            .await?
            .ok_or(DomainError::OwnerNotFound(owner_id))?;
    }
    Ok(())
}
