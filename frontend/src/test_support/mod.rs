pub mod ssr;

pub mod helpers {
    use crate::api::{LeaveRequest, UserProfile};
    use crate::state::session::{Session, SessionState};
    use chrono::NaiveDate;
    use leptos::*;

    pub fn employee_profile() -> UserProfile {
        UserProfile {
            id: 1,
            name: "Dana Field".into(),
            email: "dana@example.com".into(),
            role: "employee".into(),
        }
    }

    pub fn admin_profile() -> UserProfile {
        UserProfile {
            id: 2,
            name: "Avery Chen".into(),
            email: "avery@example.com".into(),
            role: "admin".into(),
        }
    }

    pub fn provide_session(
        user: Option<UserProfile>,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (session, set_session) = create_signal(SessionState {
            session: user.map(|user| Session {
                token: "tok-1".into(),
                user,
            }),
            loading: false,
        });
        provide_context((session, set_session));
        (session, set_session)
    }

    pub fn sample_leave(id: i64, status: &str) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id: 1,
            employee_name: "Dana Field".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            reason: "Vacation".into(),
            status: status.into(),
            created_at: "2024-01-01T08:30:00".into(),
        }
    }
}
