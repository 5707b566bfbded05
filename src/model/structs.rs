use serde::{Deserialize, Serialize};

// Common data structures used across all platforms
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseInfo {
    pub trimester: String,
    #[serde(rename = "courseNumber")]
    pub course_number: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(rename = "semesterCredits")]
    pub semester_credits: f64,
    #[serde(rename = "totalClockHours")]
    pub total_clock_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_field_names() {
        let json = serde_json::json!({
            "trimester": "1",
            "courseNumber": "CS101",
            "courseName": "Intro to Computing",
            "semesterCredits": 3,
            "totalClockHours": 45
        });

        let course: CourseInfo = serde_json::from_value(json).unwrap();
        assert_eq!(course.trimester, "1");
        assert_eq!(course.course_number, "CS101");
        assert_eq!(course.course_name, "Intro to Computing");
        assert_eq!(course.semester_credits, 3.0);
        assert_eq!(course.total_clock_hours, 45.0);
    }

    #[test]
    fn serializes_back_to_wire_field_names() {
        let course = CourseInfo {
            trimester: "2".to_string(),
            course_number: "NET201".to_string(),
            course_name: "Networking".to_string(),
            semester_credits: 3.5,
            total_clock_hours: 52.5,
        };

        let value = serde_json::to_value(&course).unwrap();
        assert!(value.get("courseNumber").is_some());
        assert!(value.get("semesterCredits").is_some());
        assert!(value.get("course_number").is_none());
    }
}
