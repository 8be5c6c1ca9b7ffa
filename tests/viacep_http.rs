use buscacep::client::services::viacep_client::{AddressLookup, LookupError, ViaCepClient};
use buscacep::common::models::LookupOutcome;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Answers a single HTTP request with a canned response and reports the
/// request line it received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request_line = String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();

        let response = format!(
            "{}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write response");
        let _ = socket.shutdown().await;
        let _ = tx.send(request_line);
    });

    (format!("http://{}", addr), rx)
}

#[tokio::test]
async fn found_address_hits_the_templated_endpoint() {
    let body = r#"{"cep":"01310-100","logradouro":"Avenida Paulista","bairro":"Bela Vista","localidade":"São Paulo","uf":"SP","estado":"São Paulo","regiao":"Sudeste","ibge":"3550308","gia":"1004","ddd":"11","siafi":"7107"}"#;
    let (base, request_line) = serve_once("HTTP/1.1 200 OK", body).await;
    let client = ViaCepClient::new(&base).expect("client");

    let outcome = client.lookup("01310-100").await.expect("lookup");

    assert_eq!(request_line.await.expect("request line"), "GET /ws/01310-100/json/ HTTP/1.1");
    let LookupOutcome::Found(address) = outcome else {
        panic!("expected an address");
    };
    assert_eq!(address.logradouro, "Avenida Paulista");
    assert_eq!(address.localidade, "São Paulo");
    assert_eq!(address.siafi, "7107");
}

#[tokio::test]
async fn erro_body_is_not_found() {
    let (base, _) = serve_once("HTTP/1.1 200 OK", r#"{"erro": true}"#).await;
    let client = ViaCepClient::new(&base).expect("client");

    assert_eq!(client.lookup("00000-000").await.expect("lookup"), LookupOutcome::NotFound);
}

#[tokio::test]
async fn bad_request_is_a_status_error() {
    let (base, _) = serve_once("HTTP/1.1 400 Bad Request", "<h1>Bad Request</h1>").await;
    let client = ViaCepClient::new(&base).expect("client");

    let err = client.lookup("0131").await.expect_err("400 must fail");
    assert!(matches!(err, LookupError::Status(400)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let client = ViaCepClient::new(&format!("http://{}", addr)).expect("client");

    let err = client.lookup("01310-100").await.expect_err("nothing listens there");
    assert!(matches!(err, LookupError::Transport(_)), "got {:?}", err);
}
