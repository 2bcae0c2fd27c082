use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<Vec<_>>();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

#[test]
fn port_defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn port_is_read_and_trimmed() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", " 8080 ")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "eighty"));
    assert!(HostConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
