/// Identifies one RPC method on a fully-qualified gRPC service.
///
/// Descriptors are declared as consts next to each client facade; the stub
/// only ever sees the descriptor, never a per-method code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method {
    pub service: &'static str,
    pub name: &'static str,
    pub kind: MethodKind,
}

/// Whether the server answers with a single message or a message stream.
/// Pagination is layered on top of unary list calls, not streaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Unary,
    ServerStreaming,
}

impl Method {
    pub const fn unary(service: &'static str, name: &'static str) -> Method {
        Method {
            service,
            name,
            kind: MethodKind::Unary,
        }
    }

    pub const fn server_streaming(service: &'static str, name: &'static str) -> Method {
        Method {
            service,
            name,
            kind: MethodKind::ServerStreaming,
        }
    }

    /// The wire path the method is addressed by.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.service, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_format() {
        let method = Method::unary("acme.v1.WidgetService", "GetWidget");
        assert_eq!(method.path(), "/acme.v1.WidgetService/GetWidget");
        assert_eq!(method.kind, MethodKind::Unary);
    }
}
