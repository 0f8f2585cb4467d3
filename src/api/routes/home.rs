//! Landing page route

use axum::response::Html;

/// GET / - Static landing page with build and platform details interpolated
pub async fn home_handler() -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Rust Docker App</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: #f5f5f5;
        }}
        .container {{
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }}
        h1 {{ color: #b7410e; }}
        code {{
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
        }}
        .size-comparison {{
            background: #d4edda;
            padding: 15px;
            border-radius: 5px;
            margin: 20px 0;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>🦀 Rust Docker App</h1>
        <p>This Rust application demonstrates <strong>multi-stage builds</strong>.</p>

        <div class="size-comparison">
            <h3>Image Size Comparison</h3>
            <p>Build stage (rust:alpine): ~900MB</p>
            <p>Final image (alpine + binary): ~15MB</p>
            <p><strong>Reduction: ~98%!</strong></p>
        </div>

        <h2>Endpoints:</h2>
        <ul>
            <li><code>GET /</code> - This page</li>
            <li><code>GET /health</code> - Health check</li>
            <li><code>GET /api/info</code> - Application info</li>
        </ul>

        <h2>Runtime Info:</h2>
        <ul>
            <li>Rust Version: {rust_version}</li>
            <li>OS/Arch: {os}/{arch}</li>
        </ul>
    </div>
</body>
</html>"#,
        rust_version = env!("INFO_SERVER_RUSTC_VERSION"),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
    );

    Html(html)
}
