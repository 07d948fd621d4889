use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::service::AuthService;
use crate::outbound::repositories::SqliteStorage;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login(
    service: Arc<AuthService<SqliteStorage, SqliteStorage>>,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    validate(&request)?;

    let token = service
        .login(
            &request.email,
            &request.password,
            i64::from(request.app_id),
        )
        .await?;

    tracing::info!(app_id = request.app_id, "Session token issued");

    Ok(LoginResponse { token })
}

fn validate(request: &LoginRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is not provided"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is not provided"));
    }

    if request.app_id == 0 {
        return Err(Status::invalid_argument("app_id is required"));
    }

    Ok(())
}
