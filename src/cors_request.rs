use crate::constants::header;
use crate::request::Request;

/// The parts of a request CORS negotiation looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorsRequest<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> CorsRequest<'a> {
    pub fn from_request(request: &'a Request) -> Self {
        Self {
            method: request.method().as_str(),
            origin: request.header(header::ORIGIN),
            access_control_request_method: request.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: request
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }
}
