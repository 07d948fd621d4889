use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::service::AuthService;
use crate::outbound::repositories::SqliteStorage;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register(
    service: Arc<AuthService<SqliteStorage, SqliteStorage>>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    validate(&request)?;

    let user_id = service.register(&request.email, &request.password).await?;

    tracing::info!(user_id, "User registered");

    Ok(RegisterResponse { user_id })
}

fn validate(request: &RegisterRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is not provided"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is not provided"));
    }

    Ok(())
}
