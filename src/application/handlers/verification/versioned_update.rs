//! Load, mutate and compare-and-swap one request.

use crate::domain::foundation::VerificationRequestId;
use crate::domain::verification::{VerificationError, VerificationRequest};
use crate::ports::{RepositoryError, VerificationRepository};

/// A conflicting writer is absorbed once; the second conflict surfaces as a
/// storage failure.
const MAX_ATTEMPTS: u32 = 2;

/// Reads the latest committed request, applies `mutate`, and writes it back
/// only if nobody else committed in between.
///
/// `mutate` runs again against the fresh state after a conflict, so every
/// guard it checks is re-evaluated. An error from `mutate` aborts without
/// writing.
pub(crate) async fn update_with_retry<T, F>(
    repository: &dyn VerificationRepository,
    id: &VerificationRequestId,
    mut mutate: F,
) -> Result<(VerificationRequest, T), VerificationError>
where
    F: FnMut(&mut VerificationRequest) -> Result<T, VerificationError> + Send,
    T: Send,
{
    let mut attempt = 1;
    loop {
        let mut request = repository
            .find_by_id(id)
            .await?
            .ok_or(VerificationError::NotFound(*id))?;
        let expected_version = request.version();

        let value = mutate(&mut request)?;

        match repository.update(&request, expected_version).await {
            Ok(version) => {
                request.set_version(version);
                return Ok((request, value));
            }
            Err(RepositoryError::Conflict { .. }) if attempt < MAX_ATTEMPTS => {
                tracing::warn!(
                    request_id = %id,
                    expected_version,
                    attempt,
                    "Concurrent update detected, retrying against fresh state"
                );
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
