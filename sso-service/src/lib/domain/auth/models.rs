/// Registered identity record.
///
/// Created once at registration, immutable afterwards. Only the salted hash
/// is ever stored; the engine never sees a plaintext password after hashing.
/// The admin flag is queried separately per call and deliberately not part
/// of this record, so it is never cached alongside the identity.
#[derive(Debug, Clone)]
pub struct User {
    /// Storage-assigned unique id
    pub id: i64,
    /// Unique email, case-sensitive as stored
    pub email: String,
    /// PHC-format password hash
    pub pass_hash: String,
}

/// Tenant application record.
///
/// Provisioned externally and read-only to this service. Each application
/// has exactly one signing secret; tokens issued for one application must
/// never validate against another's secret.
#[derive(Debug, Clone)]
pub struct App {
    pub id: i64,
    pub name: String,
    pub secret: String,
}
