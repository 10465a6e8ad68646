//! Display formatting and Hebrew labels shared by the portal screens.

use chrono::NaiveDateTime;

use crate::models::{
    AppointmentStatus, CommitmentStatus, NotificationStatus, Patient, ReferralStatus,
    ServiceCategory,
};

/// 19.08.2026
pub fn format_date(t: NaiveDateTime) -> String {
    t.format("%d.%m.%Y").to_string()
}

/// 10:30
pub fn format_time(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn format_date_time(t: NaiveDateTime) -> String {
    format!("{} {}", format_date(t), format_time(t))
}

pub fn patient_full_name(patient: &Patient) -> String {
    format!("{} {}", patient.first_name, patient.last_name)
}

pub fn category_label(category: &ServiceCategory) -> &'static str {
    match category {
        ServiceCategory::Family => "רפואת משפחה",
        ServiceCategory::Consultant => "רפואה מייעצת",
        ServiceCategory::Ultrasound => "אולטרסאונד",
        ServiceCategory::Institutes => "מכונים",
        ServiceCategory::Complementary => "רפואה משלימה",
    }
}

pub fn appointment_status_label(status: &AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "מתוכנן",
        AppointmentStatus::Completed => "הושלם",
        AppointmentStatus::Canceled => "בוטל",
    }
}

pub fn referral_status_label(status: &ReferralStatus) -> &'static str {
    match status {
        ReferralStatus::Open => "פתוח",
        ReferralStatus::Used => "נוצל",
        ReferralStatus::Expired => "פג תוקף",
        ReferralStatus::Canceled => "בוטלה",
    }
}

pub fn commitment_status_label(status: &CommitmentStatus) -> &'static str {
    match status {
        CommitmentStatus::Active => "פעיל",
        CommitmentStatus::Closed => "סגור",
        CommitmentStatus::Expired => "פג תוקף",
    }
}

pub fn notification_status_label(status: &NotificationStatus) -> &'static str {
    match status {
        NotificationStatus::Ok => "תקין",
        NotificationStatus::Warn => "אזהרה",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 19)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn dates_are_zero_padded() {
        let t = NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_date(t), "05.08.2026");
        assert_eq!(format_time(t), "09:05");
    }

    #[test]
    fn date_time_combines_both() {
        assert_eq!(format_date_time(sample_time()), "19.08.2026 10:30");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let patient = crate::seed::patients().remove(0);
        assert_eq!(patient_full_name(&patient), "דוד כהן");
    }

    #[test]
    fn status_labels() {
        assert_eq!(appointment_status_label(&AppointmentStatus::Scheduled), "מתוכנן");
        assert_eq!(appointment_status_label(&AppointmentStatus::Canceled), "בוטל");
        assert_eq!(referral_status_label(&ReferralStatus::Canceled), "בוטלה");
        assert_eq!(commitment_status_label(&CommitmentStatus::Active), "פעיל");
        assert_eq!(notification_status_label(&NotificationStatus::Warn), "אזהרה");
    }

    #[test]
    fn category_labels() {
        assert_eq!(category_label(&ServiceCategory::Ultrasound), "אולטרסאונד");
        assert_eq!(category_label(&ServiceCategory::Institutes), "מכונים");
    }
}
