use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde renames keep the JSON strings identical to the UI wire values.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "זכר",
    Female => "נקבה",
    Other => "אחר",
});

str_enum!(ServiceCategory {
    Family => "Family",
    Consultant => "Consultant",
    Ultrasound => "Ultrasound",
    Institutes => "Institutes",
    Complementary => "Complementary",
});

str_enum!(AppointmentStatus {
    Scheduled => "Scheduled",
    Completed => "Completed",
    Canceled => "Canceled",
});

str_enum!(ReferralStatus {
    Open => "Open",
    Used => "Used",
    Expired => "Expired",
    Canceled => "Canceled",
});

str_enum!(CommitmentStatus {
    Active => "Active",
    Closed => "Closed",
    Expired => "Expired",
});

str_enum!(NotificationType {
    Sms => "SMS",
    Crm => "CRM",
    PersonalArea => "PERSONAL_AREA",
    AgentSummary => "AGENT_SUMMARY",
});

str_enum!(NotificationStatus {
    Ok => "OK",
    Warn => "WARN",
});

str_enum!(SearchMode {
    Text => "text",
    List => "list",
    Code => "code",
});

str_enum!(SchedulingSystem {
    QFlow => "QFlow",
    BossaNova => "BossaNova",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn service_category_round_trip() {
        for (variant, s) in [
            (ServiceCategory::Family, "Family"),
            (ServiceCategory::Consultant, "Consultant"),
            (ServiceCategory::Ultrasound, "Ultrasound"),
            (ServiceCategory::Institutes, "Institutes"),
            (ServiceCategory::Complementary, "Complementary"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ServiceCategory::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn appointment_status_round_trip() {
        for (variant, s) in [
            (AppointmentStatus::Scheduled, "Scheduled"),
            (AppointmentStatus::Completed, "Completed"),
            (AppointmentStatus::Canceled, "Canceled"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AppointmentStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn notification_type_round_trip() {
        for (variant, s) in [
            (NotificationType::Sms, "SMS"),
            (NotificationType::Crm, "CRM"),
            (NotificationType::PersonalArea, "PERSONAL_AREA"),
            (NotificationType::AgentSummary, "AGENT_SUMMARY"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(NotificationType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn search_mode_round_trip() {
        for (variant, s) in [
            (SearchMode::Text, "text"),
            (SearchMode::List, "list"),
            (SearchMode::Code, "code"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SearchMode::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_string(&NotificationType::PersonalArea).unwrap(),
            "\"PERSONAL_AREA\""
        );
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Scheduled).unwrap(),
            "\"Scheduled\""
        );
        assert_eq!(
            serde_json::from_str::<ReferralStatus>("\"Used\"").unwrap(),
            ReferralStatus::Used
        );
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(ServiceCategory::from_str("ultrasound").is_err());
        assert!(NotificationType::from_str("sms").is_err());
        assert!(SearchMode::from_str("").is_err());
    }
}
