//! Deterministic mock dataset for the demo portal.
//!
//! Every record is computed relative to a caller-supplied `now`, so the
//! demo always shows plausible "two weeks out" / "three months ago" data
//! regardless of when a session starts. Pure construction, no error paths.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{
    Appointment, AppointmentStatus, AssignedDoctor, AvailableSlot, Branch, Clinic, Commitment,
    CommitmentStatus, Gender, Patient, Referral, ReferralStatus, ServiceCategory,
};

/// All seeded records belong to one demo family.
pub const FAMILY_ID: &str = "FAM-001";

// ─── Relative-date helpers ────────────────────────────────────────────────────

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

/// N days ahead, at 09:00.
fn days_from_now(now: NaiveDateTime, days: i64) -> NaiveDateTime {
    at(now.date() + Duration::days(days), 9, 0)
}

/// N days back, at the given hour.
fn days_ago(now: NaiveDateTime, days: i64, hour: u32) -> NaiveDateTime {
    at(now.date() - Duration::days(days), hour, 0)
}

/// N days ahead, at the given hour and minute.
fn days_from_now_at(now: NaiveDateTime, days: i64, hour: u32, minute: u32) -> NaiveDateTime {
    at(now.date() + Duration::days(days), hour, minute)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

// ─── Clinics ──────────────────────────────────────────────────────────────────

fn ramat_aviv() -> Clinic {
    Clinic {
        id: "CL-001".into(),
        name: "מרפאת רמת אביב".into(),
        city: "תל אביב".into(),
    }
}

fn herzliya() -> Clinic {
    Clinic {
        id: "CL-002".into(),
        name: "מכון דימות הרצליה".into(),
        city: "הרצליה".into(),
    }
}

fn petah_tikva() -> Clinic {
    Clinic {
        id: "CL-003".into(),
        name: "מרכז רפואי פתח תקווה".into(),
        city: "פתח תקווה".into(),
    }
}

// ─── Patients (1 family, 3 members) ───────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    first_name: &str,
    last_name: &str,
    gender: Gender,
    age: u32,
    date_of_birth: NaiveDate,
    phone: &str,
    doctor_id: &str,
    doctor_name: &str,
) -> Patient {
    Patient {
        id: id.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        gender,
        age,
        date_of_birth,
        address: "רחוב הרצל 42, תל אביב".into(),
        phone: phone.into(),
        branch: Branch {
            id: "BR-001".into(),
            name: "סניף רמת אביב".into(),
            city: "תל אביב".into(),
        },
        assigned_doctor: AssignedDoctor {
            id: doctor_id.into(),
            name: doctor_name.into(),
        },
        family_id: FAMILY_ID.into(),
    }
}

pub fn patients() -> Vec<Patient> {
    vec![
        patient(
            "123456789",
            "דוד",
            "כהן",
            Gender::Male,
            45,
            date(1981, 3, 15),
            "050-1234567",
            "DR-001",
            "ד\"ר רחל לוי",
        ),
        patient(
            "987654321",
            "שרה",
            "כהן",
            Gender::Female,
            42,
            date(1984, 7, 22),
            "050-7654321",
            "DR-002",
            "ד\"ר מיכל אברהם",
        ),
        patient(
            "111222333",
            "נועם",
            "כהן",
            Gender::Male,
            12,
            date(2014, 1, 10),
            "050-1234567",
            "DR-003",
            "ד\"ר יוסי מזרחי",
        ),
    ]
}

// ─── Appointments ─────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    patient_id: &str,
    category: ServiceCategory,
    service_name: &str,
    clinic: Clinic,
    provider_name: &str,
    start: NaiveDateTime,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.into(),
        patient_id: patient_id.into(),
        family_id: FAMILY_ID.into(),
        service_category: category,
        service_name: service_name.into(),
        clinic,
        provider_name: provider_name.into(),
        start,
        status,
    }
}

pub fn initial_appointments(now: NaiveDateTime) -> Vec<Appointment> {
    use AppointmentStatus::{Completed, Scheduled};
    use ServiceCategory::{Complementary, Consultant, Family, Ultrasound};

    vec![
        // David - past
        appointment("APT-001", "123456789", Family, "בדיקה תקופתית", ramat_aviv(), "ד\"ר רחל לוי", days_ago(now, 120, 9), Completed),
        appointment("APT-002", "123456789", Ultrasound, "אולטרסאונד בטן", herzliya(), "ד\"ר אלון שמיר", days_ago(now, 75, 11), Completed),
        appointment("APT-003", "123456789", Consultant, "ייעוץ קרדיולוגי", petah_tikva(), "ד\"ר דנה פרידמן", days_ago(now, 30, 14), Completed),
        // David - future
        appointment("APT-004", "123456789", Family, "מעקב שגרתי", ramat_aviv(), "ד\"ר רחל לוי", days_from_now_at(now, 14, 10, 30), Scheduled),
        // Sarah - past
        appointment("APT-005", "987654321", Ultrasound, "אולטרסאונד שד", herzliya(), "ד\"ר אלון שמיר", days_ago(now, 90, 10), Completed),
        appointment("APT-006", "987654321", Family, "בדיקת דם שגרתית", ramat_aviv(), "ד\"ר מיכל אברהם", days_ago(now, 45, 8), Completed),
        appointment("APT-007", "987654321", Complementary, "דיקור סיני", ramat_aviv(), "יעל גולן", days_ago(now, 15, 16), Completed),
        // Sarah - future
        appointment("APT-008", "987654321", Consultant, "ייעוץ גינקולוגי", petah_tikva(), "ד\"ר נורית בן דוד", days_from_now_at(now, 7, 11, 0), Scheduled),
        // Noam - past
        appointment("APT-009", "111222333", Family, "בדיקת התפתחות", ramat_aviv(), "ד\"ר יוסי מזרחי", days_ago(now, 60, 15), Completed),
        appointment("APT-010", "111222333", Ultrasound, "אולטרסאונד בטן", herzliya(), "ד\"ר אלון שמיר", days_ago(now, 20, 9), Completed),
        // Noam - future
        appointment("APT-011", "111222333", Family, "חיסון שגרתי", ramat_aviv(), "ד\"ר יוסי מזרחי", days_from_now_at(now, 21, 14, 0), Scheduled),
    ]
}

// ─── Referrals ────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn referral(
    id: &str,
    patient_id: &str,
    referral_type: &str,
    exam_code: &str,
    exam_name: &str,
    referring_doctor: &str,
    referral_number: &str,
    created: NaiveDateTime,
    expires: NaiveDateTime,
    status: ReferralStatus,
) -> Referral {
    Referral {
        id: id.into(),
        patient_id: patient_id.into(),
        family_id: FAMILY_ID.into(),
        referral_type: referral_type.into(),
        exam_code: exam_code.into(),
        exam_name: exam_name.into(),
        referring_doctor: referring_doctor.into(),
        referral_number: referral_number.into(),
        created,
        expires,
        status,
    }
}

pub fn initial_referrals(now: NaiveDateTime) -> Vec<Referral> {
    use ReferralStatus::{Canceled, Expired, Open, Used};

    vec![
        // David
        referral("REF-001", "123456789", "הפניה לבדיקות דם", "BLD-100", "בדיקות דם", "ד\"ר רחל לוי", "HP-20250801", days_ago(now, 30, 10), days_from_now(now, 60), Open),
        referral("REF-002", "123456789", "הפניה לקרדיולוג", "CRD-200", "קרדיולוג", "ד\"ר רחל לוי", "HP-20250645", days_ago(now, 90, 10), days_ago(now, 5, 10), Used),
        referral("REF-003", "123456789", "הפניה לבדיקת אק\"ג", "ECG-300", "בדיקת אק\"ג", "ד\"ר דנה פרידמן", "HP-20250590", days_ago(now, 120, 10), days_ago(now, 30, 10), Expired),
        referral("REF-004", "123456789", "הפניה לאולטרסאונד בטן", "US-101", "אולטרסאונד בטן", "ד\"ר רחל לוי", "HP-20250422", days_ago(now, 60, 10), days_from_now(now, 30), Open),
        referral("REF-005", "123456789", "הפניה לפעילות גופנית לגיל השלישי", "FIT-400", "פעילות גופנית לגיל השלישי", "ד\"ר רחל לוי", "HP-20250310", days_ago(now, 180, 10), days_ago(now, 90, 10), Canceled),
        referral("REF-006", "123456789", "הפניה לטיפול פיזיותרפי פרטני", "PHY-500", "טיפול פיזיותרפי פרטני", "ד\"ר יוסי מזרחי", "HP-20250287", days_ago(now, 45, 10), days_from_now(now, 45), Open),
        referral("REF-007", "123456789", "הפניה לשירות סוציאלי", "SOC-600", "שירות סוציאלי", "ד\"ר רחל לוי", "HP-20250155", days_ago(now, 200, 10), days_ago(now, 110, 10), Used),
        // Sarah
        referral("REF-008", "987654321", "הפניה לאולטרסאונד שד", "US-201", "אולטרסאונד שד", "ד\"ר מיכל אברהם", "HP-20250830", days_ago(now, 100, 10), days_ago(now, 10, 10), Used),
        referral("REF-009", "987654321", "הפניה לגינקולוג", "GYN-700", "גינקולוג", "ד\"ר מיכל אברהם", "HP-20250760", days_ago(now, 30, 10), days_from_now(now, 60), Open),
        // Noam
        referral("REF-010", "111222333", "הפניה לאולטרסאונד בטן", "US-101", "אולטרסאונד בטן", "ד\"ר יוסי מזרחי", "HP-20250900", days_ago(now, 25, 10), days_from_now(now, 65), Open),
        referral("REF-011", "111222333", "הפניה לרופא עיניים", "EYE-800", "רופא עיניים", "ד\"ר יוסי מזרחי", "HP-20250050", days_ago(now, 150, 10), days_ago(now, 60, 10), Expired),
    ]
}

// ─── Commitments ──────────────────────────────────────────────────────────────

fn commitment(
    id: &str,
    patient_id: &str,
    description: &str,
    created: NaiveDateTime,
    status: CommitmentStatus,
) -> Commitment {
    Commitment {
        id: id.into(),
        patient_id: patient_id.into(),
        family_id: FAMILY_ID.into(),
        description: description.into(),
        created,
        status,
    }
}

pub fn initial_commitments(now: NaiveDateTime) -> Vec<Commitment> {
    use CommitmentStatus::{Active, Closed};

    vec![
        commitment("CMT-001", "123456789", "התחייבות לבדיקת דם תקופתית", days_ago(now, 90, 10), Active),
        commitment("CMT-002", "123456789", "מעקב לחץ דם - 3 חודשים", days_ago(now, 60, 10), Closed),
        commitment("CMT-003", "987654321", "בדיקת ממוגרפיה שנתית", days_ago(now, 30, 10), Active),
        commitment("CMT-004", "987654321", "מעקב תירואיד", days_ago(now, 120, 10), Active),
        commitment("CMT-005", "111222333", "חיסונים לפי גיל", days_ago(now, 45, 10), Active),
    ]
}

// ─── Available slots (quick-flow ultrasound pool) ─────────────────────────────

fn slot(
    id: &str,
    service_name: &str,
    treatment_code: &str,
    start: NaiveDateTime,
    clinic: Clinic,
    provider_name: &str,
    distance_km: f64,
) -> AvailableSlot {
    AvailableSlot {
        id: id.into(),
        service_name: service_name.into(),
        treatment_code: treatment_code.into(),
        start,
        clinic,
        provider_name: provider_name.into(),
        distance_km: Some(distance_km),
    }
}

pub fn available_slots(now: NaiveDateTime) -> Vec<AvailableSlot> {
    vec![
        slot("SL-001", "אולטרסאונד בטן", "US-101", days_from_now_at(now, 2, 9, 0), ramat_aviv(), "ד\"ר אלון שמיר", 2.1),
        slot("SL-002", "אולטרסאונד בטן", "US-101", days_from_now_at(now, 2, 11, 30), herzliya(), "ד\"ר נועה ברק", 12.5),
        slot("SL-003", "אולטרסאונד בטן", "US-101", days_from_now_at(now, 3, 14, 0), petah_tikva(), "ד\"ר אלון שמיר", 18.3),
        slot("SL-004", "אולטרסאונד בטן", "US-101", days_from_now_at(now, 5, 10, 0), ramat_aviv(), "ד\"ר נועה ברק", 2.1),
        slot("SL-005", "אולטרסאונד שד", "US-201", days_from_now_at(now, 2, 10, 0), herzliya(), "ד\"ר מיכל רוזן", 12.5),
        slot("SL-006", "אולטרסאונד שד", "US-201", days_from_now_at(now, 4, 9, 30), ramat_aviv(), "ד\"ר מיכל רוזן", 2.1),
        slot("SL-007", "אולטרסאונד תירואיד", "US-301", days_from_now_at(now, 3, 8, 30), ramat_aviv(), "ד\"ר אלון שמיר", 2.1),
        slot("SL-008", "אולטרסאונד תירואיד", "US-301", days_from_now_at(now, 6, 13, 0), petah_tikva(), "ד\"ר נועה ברק", 18.3),
        slot("SL-009", "אולטרסאונד הריון", "US-401", days_from_now_at(now, 1, 10, 0), ramat_aviv(), "ד\"ר שירה כץ", 2.1),
        slot("SL-010", "אולטרסאונד הריון", "US-401", days_from_now_at(now, 3, 15, 30), herzliya(), "ד\"ר שירה כץ", 12.5),
        slot("SL-011", "אולטרסאונד כליות", "US-501", days_from_now_at(now, 4, 11, 0), petah_tikva(), "ד\"ר אלון שמיר", 18.3),
        slot("SL-012", "אולטרסאונד כליות", "US-501", days_from_now_at(now, 7, 9, 0), ramat_aviv(), "ד\"ר נועה ברק", 2.1),
        slot("SL-013", "אולטרסאונד בטן", "US-101", days_from_now_at(now, 8, 10, 30), herzliya(), "ד\"ר אלון שמיר", 12.5),
        slot("SL-014", "אולטרסאונד דופלר", "US-601", days_from_now_at(now, 5, 14, 0), ramat_aviv(), "ד\"ר שירה כץ", 2.1),
        slot("SL-015", "אולטרסאונד דופלר", "US-601", days_from_now_at(now, 9, 11, 30), petah_tikva(), "ד\"ר נועה ברק", 18.3),
        slot("SL-016", "אולטרסאונד שד", "US-201", days_from_now_at(now, 10, 9, 0), ramat_aviv(), "ד\"ר מיכל רוזן", 2.1),
        slot("SL-017", "אולטרסאונד בטן", "US-101", days_from_now_at(now, 11, 13, 0), petah_tikva(), "ד\"ר אלון שמיר", 18.3),
        slot("SL-018", "אולטרסאונד תירואיד", "US-301", days_from_now_at(now, 12, 10, 0), herzliya(), "ד\"ר אלון שמיר", 12.5),
    ]
}

// ─── Service categories ───────────────────────────────────────────────────────

/// A service-category card on the booking landing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCategoryInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Whether this category books through the quick-flow path.
    pub is_qf: bool,
    pub category: ServiceCategory,
}

pub fn service_categories() -> Vec<ServiceCategoryInfo> {
    fn info(id: &str, name: &str, icon: &str, is_qf: bool, category: ServiceCategory) -> ServiceCategoryInfo {
        ServiceCategoryInfo {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            is_qf,
            category,
        }
    }

    vec![
        info("family", "רפואה ראשונית", "👨‍👩‍👧‍👦", false, ServiceCategory::Family),
        info("consultant", "רפואה יועצת", "🩺", false, ServiceCategory::Consultant),
        info("ultrasound", "אולטרסאונד", "📡", true, ServiceCategory::Ultrasound),
        info("institutes", "מכונים", "🏥", false, ServiceCategory::Institutes),
        info("complementary", "רפואה משלימה", "🌿", false, ServiceCategory::Complementary),
    ]
}

// ─── Ultrasound exam types (search dropdown) ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamType {
    pub code: String,
    pub name: String,
}

pub fn ultrasound_exam_types() -> Vec<ExamType> {
    [
        ("US-101", "אולטרסאונד בטן"),
        ("US-201", "אולטרסאונד שד"),
        ("US-301", "אולטרסאונד תירואיד"),
        ("US-401", "אולטרסאונד הריון"),
        ("US-501", "אולטרסאונד כליות"),
        ("US-601", "אולטרסאונד דופלר"),
    ]
    .into_iter()
    .map(|(code, name)| ExamType {
        code: code.into(),
        name: name.into(),
    })
    .collect()
}

// ─── Legacy scheduler (S400) reference data ───────────────────────────────────

/// A bookable family-doctor slot in the legacy scheduler pastiche.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyDoctorSlot {
    pub id: String,
    pub time: NaiveDateTime,
    pub visit_type: String,
}

pub fn family_doctor_slots(now: NaiveDateTime) -> Vec<FamilyDoctorSlot> {
    fn fd(id: &str, time: NaiveDateTime, visit_type: &str) -> FamilyDoctorSlot {
        FamilyDoctorSlot {
            id: id.into(),
            time,
            visit_type: visit_type.into(),
        }
    }

    vec![
        fd("FD-001", days_from_now_at(now, 1, 8, 30), "ביקור רגיל"),
        fd("FD-002", days_from_now_at(now, 1, 10, 0), "ביקור רגיל"),
        fd("FD-003", days_from_now_at(now, 2, 9, 0), "מעקב"),
        fd("FD-004", days_from_now_at(now, 2, 14, 30), "ביקור רגיל"),
        fd("FD-005", days_from_now_at(now, 3, 11, 0), "ביקור דחוף"),
        fd("FD-006", days_from_now_at(now, 4, 8, 0), "ביקור רגיל"),
    ]
}

/// A consultant specialty with its sub-specialty picklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: String,
    pub name: String,
    pub sub_specialties: Vec<String>,
}

pub fn consultant_specialties() -> Vec<Specialty> {
    fn specialty(id: &str, name: &str, subs: [&str; 2]) -> Specialty {
        Specialty {
            id: id.into(),
            name: name.into(),
            sub_specialties: subs.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        specialty("surgery", "כירורגיה", ["כירורגיה כללית", "כירורגיית כלי דם"]),
        specialty("neurology", "נוירולוגיה", ["נוירולוגיה כללית", "נוירולוגיה ילדים"]),
        specialty("cardiology", "קרדיולוגיה", ["קרדיולוגיה כללית", "אלקטרופיזיולוגיה"]),
        specialty("ent", "אף אוזן גרון", ["כללי", "אלרגולוגיה"]),
        specialty("ophthalmology", "עיניים", ["עיניים כללי", "רשתית"]),
        specialty("dermatology", "עור", ["עור כללי", "עור קוסמטי"]),
        specialty("orthopedics", "אורתופדיה", ["אורתופדיה כללית", "ספורט"]),
        specialty("gastro", "גסטרואנטרולוגיה", ["גסטרו כללי", "כבד"]),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultantSlot {
    pub id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub sub_specialty: String,
    pub clinic: Clinic,
    pub start: NaiveDateTime,
}

pub fn consultant_slots(now: NaiveDateTime) -> Vec<ConsultantSlot> {
    fn cs(
        id: &str,
        doctor_name: &str,
        specialty: &str,
        sub_specialty: &str,
        clinic: Clinic,
        start: NaiveDateTime,
    ) -> ConsultantSlot {
        ConsultantSlot {
            id: id.into(),
            doctor_name: doctor_name.into(),
            specialty: specialty.into(),
            sub_specialty: sub_specialty.into(),
            clinic,
            start,
        }
    }

    vec![
        cs("CS-001", "ד\"ר יעקב גולדברג", "קרדיולוגיה", "קרדיולוגיה כללית", ramat_aviv(), days_from_now_at(now, 3, 10, 0)),
        cs("CS-002", "ד\"ר סמדר ביטון", "נוירולוגיה", "נוירולוגיה כללית", petah_tikva(), days_from_now_at(now, 4, 14, 30)),
        cs("CS-003", "ד\"ר אמיר חסון", "אורתופדיה", "אורתופדיה כללית", herzliya(), days_from_now_at(now, 2, 9, 0)),
        cs("CS-004", "ד\"ר רונית שפירא", "עיניים", "עיניים כללי", ramat_aviv(), days_from_now_at(now, 5, 11, 30)),
        cs("CS-005", "ד\"ר משה דהן", "עור", "עור כללי", petah_tikva(), days_from_now_at(now, 6, 8, 0)),
        cs("CS-006", "ד\"ר טלי ורדי", "גסטרואנטרולוגיה", "גסטרו כללי", ramat_aviv(), days_from_now_at(now, 3, 15, 0)),
        cs("CS-007", "ד\"ר עופר נחום", "כירורגיה", "כירורגיה כללית", herzliya(), days_from_now_at(now, 7, 10, 0)),
        cs("CS-008", "ד\"ר לימור אלון", "אף אוזן גרון", "כללי", petah_tikva(), days_from_now_at(now, 4, 9, 30)),
        cs("CS-009", "ד\"ר יעקב גולדברג", "קרדיולוגיה", "אלקטרופיזיולוגיה", herzliya(), days_from_now_at(now, 8, 13, 0)),
        cs("CS-010", "ד\"ר אמיר חסון", "אורתופדיה", "ספורט", ramat_aviv(), days_from_now_at(now, 5, 16, 0)),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstituteType {
    pub id: String,
    pub name: String,
    pub code: String,
}

pub fn institute_types() -> Vec<InstituteType> {
    [
        ("xray", "רנטגן", "XR-100"),
        ("holter", "הולטר", "HLT-200"),
        ("pregnancy", "מעקב הריון", "PRG-300"),
        ("hearing", "בדיקת שמיעה", "AUD-400"),
        ("physio", "פיזיותרפיה", "PHY-500"),
        ("stress", "בדיקת מאמץ", "STR-600"),
    ]
    .into_iter()
    .map(|(id, name, code)| InstituteType {
        id: id.into(),
        name: name.into(),
        code: code.into(),
    })
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstituteSlot {
    pub id: String,
    pub institute_name: String,
    pub code: String,
    pub clinic: Clinic,
    pub start: NaiveDateTime,
    pub provider_name: String,
}

pub fn institute_slots(now: NaiveDateTime) -> Vec<InstituteSlot> {
    fn is(
        id: &str,
        institute_name: &str,
        code: &str,
        clinic: Clinic,
        start: NaiveDateTime,
        provider_name: &str,
    ) -> InstituteSlot {
        InstituteSlot {
            id: id.into(),
            institute_name: institute_name.into(),
            code: code.into(),
            clinic,
            start,
            provider_name: provider_name.into(),
        }
    }

    vec![
        is("IS-001", "רנטגן", "XR-100", ramat_aviv(), days_from_now_at(now, 1, 8, 0), "צוות רנטגן"),
        is("IS-002", "רנטגן", "XR-100", herzliya(), days_from_now_at(now, 2, 10, 30), "צוות רנטגן"),
        is("IS-003", "הולטר", "HLT-200", petah_tikva(), days_from_now_at(now, 3, 9, 0), "מעבדת הולטר"),
        is("IS-004", "הולטר", "HLT-200", ramat_aviv(), days_from_now_at(now, 5, 11, 0), "מעבדת הולטר"),
        is("IS-005", "מעקב הריון", "PRG-300", ramat_aviv(), days_from_now_at(now, 2, 14, 0), "ד\"ר שירה כץ"),
        is("IS-006", "בדיקת שמיעה", "AUD-400", herzliya(), days_from_now_at(now, 4, 8, 30), "מכון שמיעה"),
        is("IS-007", "פיזיותרפיה", "PHY-500", ramat_aviv(), days_from_now_at(now, 1, 16, 0), "מכון פיזיותרפיה"),
        is("IS-008", "פיזיותרפיה", "PHY-500", petah_tikva(), days_from_now_at(now, 3, 10, 0), "מכון פיזיותרפיה"),
        is("IS-009", "בדיקת מאמץ", "STR-600", herzliya(), days_from_now_at(now, 6, 9, 0), "מעבדת מאמץ"),
        is("IS-010", "בדיקת מאמץ", "STR-600", ramat_aviv(), days_from_now_at(now, 8, 13, 30), "מעבדת מאמץ"),
    ]
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixed_now() -> NaiveDateTime {
        date(2026, 8, 5).and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn seed_counts() {
        let now = fixed_now();
        assert_eq!(patients().len(), 3);
        assert_eq!(initial_appointments(now).len(), 11);
        assert_eq!(initial_referrals(now).len(), 11);
        assert_eq!(initial_commitments(now).len(), 5);
        assert_eq!(available_slots(now).len(), 18);
    }

    #[test]
    fn all_patients_share_one_family() {
        for p in patients() {
            assert_eq!(p.family_id, FAMILY_ID);
        }
    }

    #[test]
    fn child_records_reference_seeded_patients() {
        let now = fixed_now();
        let ids: HashSet<String> = patients().into_iter().map(|p| p.id).collect();

        for a in initial_appointments(now) {
            assert!(ids.contains(&a.patient_id), "appointment {} orphaned", a.id);
            assert_eq!(a.family_id, FAMILY_ID);
        }
        for r in initial_referrals(now) {
            assert!(ids.contains(&r.patient_id), "referral {} orphaned", r.id);
        }
        for c in initial_commitments(now) {
            assert!(ids.contains(&c.patient_id), "commitment {} orphaned", c.id);
        }
    }

    #[test]
    fn relative_dates_land_on_expected_wall_clock() {
        let now = fixed_now();
        let appointments = initial_appointments(now);

        // David's future follow-up: 14 days out at 10:30.
        let followup = appointments.iter().find(|a| a.id == "APT-004").unwrap();
        assert_eq!(followup.start.date(), date(2026, 8, 19));
        assert_eq!(followup.start.time().to_string(), "10:30:00");

        // Past records keep their seeded hour.
        let checkup = appointments.iter().find(|a| a.id == "APT-001").unwrap();
        assert_eq!(checkup.start.date(), date(2026, 4, 7));
        assert_eq!(checkup.start.time().to_string(), "09:00:00");
    }

    #[test]
    fn slot_codes_come_from_exam_type_table() {
        let now = fixed_now();
        let codes: HashSet<String> = ultrasound_exam_types().into_iter().map(|e| e.code).collect();
        for s in available_slots(now) {
            assert!(codes.contains(&s.treatment_code), "slot {} has unknown code", s.id);
        }
    }

    #[test]
    fn slot_names_match_exam_type_names() {
        let now = fixed_now();
        let by_code: Vec<ExamType> = ultrasound_exam_types();
        for s in available_slots(now) {
            let exam = by_code.iter().find(|e| e.code == s.treatment_code).unwrap();
            assert_eq!(exam.name, s.service_name);
        }
    }

    #[test]
    fn only_ultrasound_is_quick_flow() {
        let cats = service_categories();
        assert_eq!(cats.len(), 5);
        for c in &cats {
            assert_eq!(c.is_qf, c.category == ServiceCategory::Ultrasound);
        }
    }

    #[test]
    fn legacy_reference_tables() {
        let now = fixed_now();
        assert_eq!(family_doctor_slots(now).len(), 6);
        assert_eq!(institute_types().len(), 6);
        assert_eq!(institute_slots(now).len(), 10);

        let specialties = consultant_specialties();
        assert_eq!(specialties.len(), 8);
        for s in &specialties {
            assert_eq!(s.sub_specialties.len(), 2);
        }

        // Every consultant slot advertises a seeded specialty.
        let names: HashSet<String> = specialties.into_iter().map(|s| s.name).collect();
        for slot in consultant_slots(now) {
            assert!(names.contains(&slot.specialty), "slot {} has unknown specialty", slot.id);
        }
    }
}
