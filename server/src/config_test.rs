use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 9000 ")).unwrap(), 9000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT 'eighty'"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_addr_defaults_to_unspecified() {
    assert_eq!(parse_bind_addr(None).unwrap(), DEFAULT_BIND_ADDR);
}

#[test]
fn parse_bind_addr_reads_loopback() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_bind_addr(Some("::1")).unwrap().is_ipv6());
}

#[test]
fn parse_bind_addr_rejects_hostname() {
    let err = parse_bind_addr(Some("localhost")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}

#[test]
fn socket_addr_joins_bind_addr_and_port() {
    let config = ServerConfig { bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 8080 };
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn default_config_listens_on_all_interfaces() {
    assert_eq!(ServerConfig::default().socket_addr().to_string(), "0.0.0.0:3000");
}
