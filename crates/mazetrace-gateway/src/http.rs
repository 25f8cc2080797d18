use mazetrace_core::{Grid, Markers, MazeSize, SolveRequest, Trace};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    GatewayError, SolverGateway,
    dto::{ErrorDto, GenerateResponseDto, SolveRequestDto, SolveResponseDto},
};

/// Base URL of a solver service running locally with its defaults.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// A [`SolverGateway`] backed by a remote solver service.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// The service base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl SolverGateway for HttpGateway {
    fn generate(&self, size: MazeSize) -> Result<Grid, GatewayError> {
        log::info!("GET {} size={size}", self.endpoint("generate-maze"));
        let response = self
            .client
            .get(self.endpoint("generate-maze"))
            .query(&[("size", size.get())])
            .send()?;
        let dto: GenerateResponseDto = decode(response)?;
        let grid = dto.into_grid()?;
        Markers::corners(&grid)?;
        Ok(grid)
    }

    fn solve(&self, request: &SolveRequest) -> Result<Trace, GatewayError> {
        log::info!(
            "POST {} algorithm={}",
            self.endpoint("solve-maze"),
            request.algorithm
        );
        let response = self
            .client
            .post(self.endpoint("solve-maze"))
            .json(&SolveRequestDto::from(request))
            .send()?;
        let dto: SolveResponseDto = decode(response)?;
        Ok(dto.into())
    }
}

fn decode<T>(response: Response) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorDto>(&body).map_or_else(
            |_| status.canonical_reason().unwrap_or("unknown status").to_owned(),
            |dto| dto.error,
        );
        log::warn!("server returned {status}: {message}");
        return Err(GatewayError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead as _, BufReader, Read as _, Write as _},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use mazetrace_core::{Algorithm, Coordinate, Grid, GridError, Markers, MazeSize, SolveRequest};

    use super::HttpGateway;
    use crate::{GatewayError, SolverGateway};

    /// Serves one canned response and returns the raw request line and body.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<(String, String)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut content_length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                let header = header.trim_end();
                if header.is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap();
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();

            (
                request_line.trim_end().to_owned(),
                String::from_utf8(request_body).unwrap(),
            )
        });
        (url, handle)
    }

    fn request() -> SolveRequest {
        let grid: Grid = "..\n..".parse().unwrap();
        let markers = Markers::corners(&grid).unwrap();
        SolveRequest::new(grid, Algorithm::Bfs, markers)
    }

    #[test]
    fn generate_sends_size_and_decodes_maze() {
        let (url, server) = serve_once("200 OK", r#"{"maze": [[0,0,1],[1,0,1],[1,0,0]]}"#);
        let gateway = HttpGateway::new(format!("{url}/")).unwrap();
        let grid = gateway.generate(MazeSize::new(5).unwrap()).unwrap();
        assert_eq!(grid.to_string(), "..#\n#.#\n#..\n");

        let (request_line, _) = server.join().unwrap();
        assert_eq!(request_line, "GET /generate-maze?size=5 HTTP/1.1");
    }

    #[test]
    fn solve_posts_json_and_decodes_trace() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"solution": [[0,0],[0,1],[1,1]], "visited": [[0,0],[0,1],[1,0],[1,1]]}"#,
        );
        let gateway = HttpGateway::new(url).unwrap();
        let trace = gateway.solve(&request()).unwrap();
        assert_eq!(trace.visited().len(), 4);
        assert_eq!(trace.path().last(), Some(&Coordinate::new(1, 1)));

        let (request_line, body) = server.join().unwrap();
        assert_eq!(request_line, "POST /solve-maze HTTP/1.1");
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "maze": [[0, 0], [0, 0]],
                "algorithm": "bfs",
                "start": [0, 0],
                "end": [1, 1],
            })
        );
    }

    #[test]
    fn empty_solution_is_a_successful_unsolved_trace() {
        let (url, server) = serve_once("200 OK", r#"{"solution": [], "visited": [[0,0],[0,1]]}"#);
        let trace = HttpGateway::new(url).unwrap().solve(&request()).unwrap();
        assert!(!trace.is_solved());
        assert_eq!(trace.visited().len(), 2);
        server.join().unwrap();
    }

    #[test]
    fn error_status_surfaces_server_message() {
        let (url, server) = serve_once(
            "400 BAD REQUEST",
            r#"{"error": "Size must be between 5 and 30"}"#,
        );
        let err = HttpGateway::new(url)
            .unwrap()
            .generate(MazeSize::MIN)
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 400,
                message: "Size must be between 5 and 30".to_owned(),
            }
        );
        server.join().unwrap();
    }

    #[test]
    fn error_status_without_body_uses_reason() {
        let (url, server) = serve_once("500 Internal Server Error", "");
        let err = HttpGateway::new(url).unwrap().solve(&request()).unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 500,
                message: "Internal Server Error".to_owned(),
            }
        );
        server.join().unwrap();
    }

    #[test]
    fn malformed_bodies_are_classified() {
        let (url, server) = serve_once("200 OK", "not json");
        let err = HttpGateway::new(url).unwrap().solve(&request()).unwrap_err();
        assert!(err.is_decode());
        server.join().unwrap();

        let (url, server) = serve_once("200 OK", r#"{"maze": [[0,0],[0]]}"#);
        let err = HttpGateway::new(url)
            .unwrap()
            .generate(MazeSize::MIN)
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::InvalidMaze(GridError::Ragged { .. })
        ));
        server.join().unwrap();

        let (url, server) = serve_once("200 OK", r#"{"maze": [[0,0],[0,1]]}"#);
        let err = HttpGateway::new(url)
            .unwrap()
            .generate(MazeSize::MIN)
            .unwrap_err();
        assert!(err.is_invalid_corner());
        server.join().unwrap();
    }

    #[test]
    fn unreachable_server_is_an_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let err = HttpGateway::new(url)
            .unwrap()
            .generate(MazeSize::DEFAULT)
            .unwrap_err();
        assert!(err.is_http());
    }
}
