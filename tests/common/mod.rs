// Common test utilities shared across test files

use gateway_jsgen::config::{DescriptorSet, FileDescriptor, GeneratorConfig};

/// Descriptor used by most end-to-end tests
#[allow(dead_code)]
pub const MESSAGING_YAML: &str = r#"
files:
  - name: messaging/v1/messages.proto
    services:
      - name: Messaging
        methods:
          - name: GetMessage
            bindings:
              - verb: GET
                path: /v1/messages/{message_id}
              - verb: GET
                path: /v1/users/{user_id}/messages/{message_id}
          - name: CreateMessage
            bindings:
              - verb: POST
                path: /v1/rooms/{room}/messages
                body: "*"
          - name: UpdateMessage
            bindings:
              - verb: PATCH
                path: /v1/{message.name=rooms/*/messages/*}
                body: message
          - name: Watch
      - name: Rooms
        methods:
          - name: ListRooms
            bindings:
              - verb: GET
                path: /v1/rooms
"#;

/// Parse a YAML descriptor document
#[allow(dead_code)]
pub fn descriptor(yaml: &str) -> DescriptorSet {
    DescriptorSet::from_str_with_format(yaml, true).expect("Invalid test descriptor")
}

/// First file of a YAML descriptor document
#[allow(dead_code)]
pub fn single_file(yaml: &str) -> FileDescriptor {
    descriptor(yaml)
        .files
        .into_iter()
        .next()
        .expect("Descriptor has no files")
}

#[allow(dead_code)]
pub fn default_config() -> GeneratorConfig {
    GeneratorConfig::default()
}
