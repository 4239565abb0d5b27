// tests/display_settings.rs
use std::{
    io,
    sync::{Arc, Mutex},
};

use showroom_cms::{
    application::commands::{
        display::{SetOrderIndexCommand, SetVisibilityCommand},
        team::CreateTeamMemberCommand,
    },
    domain::content::Collection,
};

mod support;

use support::{TestApp, admin_actor, fixed_now};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn display_writes_emit_events() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = TestApp::new();
    let admin = admin_actor(fixed_now());
    let member = app
        .services
        .team_commands
        .create_member(
            &admin,
            CreateTeamMemberCommand {
                full_name: "Noor Haddad".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let display = &app.services.display_commands;
    let settings = display
        .set_order_index(
            &admin,
            SetOrderIndexCommand {
                collection: Collection::TeamMembers,
                id: member.id,
                order_index: 3,
            },
        )
        .await
        .unwrap();
    assert_eq!(settings.order_index, 3);

    display
        .set_visibility(
            &admin,
            SetVisibilityCommand {
                collection: Collection::TeamMembers,
                id: member.id,
                visible: false,
            },
        )
        .await
        .unwrap();

    let text = logs.text();
    assert!(text.contains("order changed"), "{text}");
    assert!(text.contains("order_index=3"), "{text}");
    assert!(text.contains("visibility changed"), "{text}");
}
