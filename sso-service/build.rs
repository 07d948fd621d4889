fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate gRPC code from proto files; the client side is exercised by
    // the integration test suite.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["../proto/sso.proto"], &["../proto"])?;

    Ok(())
}
