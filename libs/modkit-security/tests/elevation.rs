#![allow(clippy::unwrap_used, clippy::expect_used)]

use modkit_security::{Privilege, SecurityContext, SystemSecurityContext, TenantId};

#[test]
fn forged_wire_context_is_not_elevated() {
    let forged = r#"{
        "subject_id": "system",
        "subject_type": "system",
        "tenant_id": "DEFAULT",
        "token_scopes": ["*"],
        "privilege": "System"
    }"#;

    let ctx: SecurityContext = serde_json::from_str(forged).expect("context deserializes");

    assert_eq!(ctx.privilege(), Privilege::Tenant);
    assert!(!ctx.may_access_tenant(&TenantId::new("other").unwrap()));
}

#[tokio::test]
async fn elevation_is_confined_to_the_scope() {
    let system = SystemSecurityContext::new();
    let tenant = TenantId::new("DEFAULT").unwrap();
    let other = TenantId::new("other").unwrap();

    let inside = system
        .run_as_system(&tenant, |ctx| async move { ctx.may_access_tenant(&other) })
        .await;
    assert!(inside);

    let outside = SecurityContext::builder().tenant_id(tenant).build();
    assert!(!outside.is_system());
}
