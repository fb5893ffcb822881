//! The embedded tour content.
//!
//! Everything here is literal text the sections render verbatim. The
//! accessors return `'static` slices so sections can hold references
//! without ownership ceremony.

use crate::types::{Feature, Hero, PracticeCategory, Resource, Step, Tip, TipKind};

/// Hero banner copy.
pub fn hero() -> Hero {
    Hero {
        headline: "Explore the world of gRPC",
        intro: "Join us on a gentle tour that takes you from zero to your \
                first working service with this modern communication \
                framework.",
        glossary_term: "gRPC",
        glossary_text: "gRPC is a modern, high-performance remote procedure \
                        call framework developed at Google that runs in any \
                        environment.",
        highlights: HERO_HIGHLIGHTS,
    }
}

const HERO_HIGHLIGHTS: &[Feature] = &[
    Feature {
        title: "High performance",
        description: "Built on HTTP/2 with bidirectional streaming",
        details: "HTTP/2 multiplexes many requests over one connection, \
                  which greatly improves network utilization.",
    },
    Feature {
        title: "Cross-language",
        description: "Works across many programming languages",
        details: "Generated clients and servers interoperate seamlessly \
                  regardless of implementation language.",
    },
    Feature {
        title: "Type safe",
        description: "Strongly typed contracts checked at compile time",
        details: "Interface definitions are compiled, so type mismatches \
                  surface before your code ever runs.",
    },
];

/// The six feature cards.
pub fn features() -> &'static [Feature] {
    FEATURES
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "High-performance transport",
        description: "HTTP/2 with multiplexing, flow control, and server push",
        details: "HTTP/2 sends many requests concurrently over a single \
                  connection, greatly improving network utilization.",
    },
    Feature {
        title: "Cross-language support",
        description: "Go, TypeScript, C#, Python, C++, and more",
        details: "Protocol Buffers serves as the interface definition \
                  language and generates client and server code for many \
                  languages.",
    },
    Feature {
        title: "Type safety",
        description: "Strong typing with compile-time checks cuts runtime errors",
        details: "Service interfaces are defined in .proto files; the \
                  compiler checks type agreement and catches common \
                  mistakes early.",
    },
    Feature {
        title: "Code generation",
        description: "Generated clients and servers eliminate boilerplate",
        details: "The protoc compiler generates code in your target \
                  language directly from the .proto definition.",
    },
    Feature {
        title: "Streaming",
        description: "Client-side, server-side, and bidirectional streams",
        details: "Streams enable real-time data transfer for use cases like \
                  chat applications and live monitoring.",
    },
    Feature {
        title: "Interceptors",
        description: "Flexible middleware for auth, logging, and more",
        details: "Interceptors run custom logic before and after request \
                  handling, such as authentication or request logging.",
    },
];

/// The quick-start step collection.
///
/// Invariant relied on by the step list: non-empty, order significant.
pub fn quick_start_steps() -> &'static [Step] {
    QUICK_START_STEPS
}

const QUICK_START_STEPS: &[Step] = &[
    Step {
        title: "Install the toolchain",
        description: "Install the Protocol Buffers compiler and Go plugins",
        explanation: "protoc is the Protocol Buffers compiler; it generates \
                      code for many target languages.",
        code: r#"# Install the protoc plugins
go install google.golang.org/protobuf/cmd/protoc-gen-go@latest
go install google.golang.org/grpc/cmd/protoc-gen-go-grpc@latest

# Verify the installation
protoc --version"#,
    },
    Step {
        title: "Define the service",
        description: "Create a .proto file describing the service interface",
        explanation: ".proto files use Protocol Buffers syntax to define \
                      service interfaces and message formats.",
        code: r#"syntax = "proto3";

package hello;
option go_package = "./hello";

// The service definition
service Greeter {
  rpc SayHello (HelloRequest) returns (HelloReply) {}
}

// The request message
message HelloRequest {
  string name = 1;
}

// The response message
message HelloReply {
  string message = 1;
}"#,
    },
    Step {
        title: "Generate code",
        description: "Run the protoc compiler to generate Go code",
        explanation: "protoc generates message types and service interfaces \
                      in the target language from the .proto file.",
        code: r#"# Generate Go code
protoc --go_out=. --go_opt=paths=source_relative \
       --go-grpc_out=. --go-grpc_opt=paths=source_relative \
       hello.proto

# Generated files
# hello.pb.go        - message type definitions
# hello_grpc.pb.go   - service interface definitions"#,
    },
    Step {
        title: "Implement the server",
        description: "Write server code implementing the defined service",
        explanation: "Implement the interface defined in the .proto file \
                      and start a gRPC server to serve it.",
        code: r#"package main

import (
    "context"
    "log"
    "net"

    "google.golang.org/grpc"
    pb "./hello"
)

type server struct {
    pb.UnimplementedGreeterServer
}

func (s *server) SayHello(ctx context.Context, req *pb.HelloRequest) (*pb.HelloReply, error) {
    return &pb.HelloReply{
        Message: "Hello " + req.GetName(),
    }, nil
}

func main() {
    lis, err := net.Listen("tcp", ":50051")
    if err != nil {
        log.Fatalf("failed to listen: %v", err)
    }

    s := grpc.NewServer()
    pb.RegisterGreeterServer(s, &server{})

    log.Println("Server listening on :50051")
    if err := s.Serve(lis); err != nil {
        log.Fatalf("failed to serve: %v", err)
    }
}"#,
    },
];

/// The best-practice tip categories.
pub fn best_practices() -> &'static [PracticeCategory] {
    BEST_PRACTICES
}

const BEST_PRACTICES: &[PracticeCategory] = &[
    PracticeCategory {
        name: "Security",
        tips: &[
            Tip {
                title: "Use TLS encryption",
                description: "Always enable TLS in production environments",
                details: "TLS prevents eavesdropping and tampering in \
                          transit, keeping communication secure.",
                kind: TipKind::Recommended,
            },
            Tip {
                title: "Authenticate clients",
                description: "Verify client identity with JWT or similar",
                details: "An interceptor gives you one place to enforce \
                          authentication so only legitimate users reach the \
                          service.",
                kind: TipKind::Recommended,
            },
        ],
    },
    PracticeCategory {
        name: "Performance",
        tips: &[
            Tip {
                title: "Prefer streaming for bulk data",
                description: "Use streaming RPCs when moving lots of data",
                details: "Streaming reduces memory pressure and improves \
                          throughput, especially for large transfers.",
                kind: TipKind::Recommended,
            },
            Tip {
                title: "Avoid blocking calls",
                description: "Use async call patterns under high concurrency",
                details: "Async calls keep threads from blocking and raise \
                          the system's concurrent capacity.",
                kind: TipKind::Caution,
            },
        ],
    },
    PracticeCategory {
        name: "Error handling",
        tips: &[
            Tip {
                title: "Use standard status codes",
                description: "Follow the gRPC status code conventions",
                details: "gRPC defines standard codes such as NOT_FOUND and \
                          INVALID_ARGUMENT; use them for clear errors.",
                kind: TipKind::Recommended,
            },
            Tip {
                title: "Retry transient failures",
                description: "Add a smart retry policy for temporary errors",
                details: "Exponential backoff improves success rates when \
                          the network is flaky.",
                kind: TipKind::Recommended,
            },
        ],
    },
    PracticeCategory {
        name: "Data design",
        tips: &[
            Tip {
                title: "Keep messages simple",
                description: "Avoid deeply nested structures",
                details: "Flat messages serialize faster and are easier to \
                          maintain and understand.",
                kind: TipKind::Recommended,
            },
            Tip {
                title: "Plan for compatibility",
                description: "Design APIs with backward compatibility in mind",
                details: "Rely on field numbers rather than names, make new \
                          fields optional, and never delete fields.",
                kind: TipKind::Caution,
            },
        ],
    },
    PracticeCategory {
        name: "Operations",
        tips: &[
            Tip {
                title: "Integrate tracing",
                description: "Use OpenTelemetry for distributed tracing",
                details: "Traces help diagnose performance problems and \
                          errors across a distributed system.",
                kind: TipKind::Recommended,
            },
            Tip {
                title: "Expose health checks",
                description: "Implement the health checking protocol",
                details: "gRPC's standard health protocol lets load \
                          balancers monitor service status.",
                kind: TipKind::Recommended,
            },
        ],
    },
    PracticeCategory {
        name: "Teamwork",
        tips: &[
            Tip {
                title: "Maintain API docs",
                description: "Keep .proto comments complete and current",
                details: "Good API documentation cuts communication \
                          overhead and speeds development.",
                kind: TipKind::Recommended,
            },
            Tip {
                title: "Automate code generation",
                description: "Generate code as part of CI/CD",
                details: "Automated generation keeps client and server code \
                          consistent with the contract.",
                kind: TipKind::Recommended,
            },
        ],
    },
];

/// Footer resources.
pub fn resources() -> &'static [Resource] {
    RESOURCES
}

const RESOURCES: &[Resource] = &[
    Resource {
        title: "Official docs",
        description: "gRPC documentation and tutorials",
        url: "https://grpc.io/docs/",
    },
    Resource {
        title: "GitHub repository",
        description: "Browse the source and example projects",
        url: "https://github.com/grpc/grpc-go",
    },
    Resource {
        title: "Community",
        description: "Join the gRPC discussion group",
        url: "https://groups.google.com/g/grpc-io",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_start_steps_non_empty() {
        let steps = quick_start_steps();
        assert!(!steps.is_empty(), "Step collection must be non-empty");
        for step in steps {
            assert!(!step.title.is_empty());
            assert!(!step.description.is_empty());
            assert!(!step.explanation.is_empty());
            assert!(!step.code.is_empty());
        }
    }

    #[test]
    fn test_features_complete() {
        let features = features();
        assert_eq!(features.len(), 6);
        for feature in features {
            assert!(!feature.title.is_empty());
            assert!(!feature.details.is_empty());
        }
    }

    #[test]
    fn test_best_practices_complete() {
        let categories = best_practices();
        assert_eq!(categories.len(), 6);
        for category in categories {
            assert!(!category.name.is_empty());
            assert!(!category.tips.is_empty());
            for tip in category.tips {
                assert!(!tip.title.is_empty());
                assert!(!tip.details.is_empty());
            }
        }
    }

    #[test]
    fn test_hero_glossary() {
        let hero = hero();
        assert_eq!(hero.glossary_term, "gRPC");
        assert!(!hero.glossary_text.is_empty());
        assert_eq!(hero.highlights.len(), 3);
    }

    #[test]
    fn test_resources_have_urls() {
        for resource in resources() {
            assert!(resource.url.starts_with("https://"));
        }
    }

    #[test]
    fn test_step_titles_unique() {
        let steps = quick_start_steps();
        for (i, a) in steps.iter().enumerate() {
            for b in &steps[i + 1..] {
                assert_ne!(a.title, b.title, "Step titles should be distinct");
            }
        }
    }
}
