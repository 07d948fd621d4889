use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::service::AuthService;
use crate::outbound::repositories::SqliteStorage;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin(
    service: Arc<AuthService<SqliteStorage, SqliteStorage>>,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    validate(&request)?;

    let is_admin = service.is_admin(request.user_id).await?;

    Ok(IsAdminResponse { is_admin })
}

fn validate(request: &IsAdminRequest) -> Result<(), Status> {
    if request.user_id == 0 {
        return Err(Status::invalid_argument("user_id is not provided"));
    }

    Ok(())
}
