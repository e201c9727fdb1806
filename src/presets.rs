pub const DEFAULT_CONFIG: &str = r#"[server]
addr = "0.0.0.0:3000"
# Empty list allows any origin
allowed_origins = []
body_limit_bytes = 1048576
compression = true

[rate_limit]
enabled = true
window_secs = 900
max_requests = 100

[profiles.dev.server]
addr = "127.0.0.1:3000"

[profiles.dev.rate_limit]
enabled = false
"#;
