//! 기본 지식 데이터
//!
//! 저장소가 비어 있을 때 주입되는 대학 지원 기본 지식 항목입니다.

use super::store::NewKnowledgeItem;

fn item(category: &str, title: &str, content: &str, tags: &[&str]) -> NewKnowledgeItem {
    NewKnowledgeItem {
        category: category.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// 기본 대학 지식 항목 목록
pub fn default_items() -> Vec<NewKnowledgeItem> {
    vec![
        item(
            "academic",
            "Academic Policies",
            "The university's academic policies govern all aspects of academic life, including course registration, grading systems, academic integrity, and degree requirements. Students must maintain a minimum GPA of 2.0 to remain in good academic standing. Academic dishonesty, including plagiarism and cheating, is taken very seriously and can result in course failure or expulsion.",
            &["policies", "academic", "integrity", "gpa"],
        ),
        item(
            "academic",
            "Course Registration Process",
            "Course registration opens approximately 4 weeks before the start of each semester. Registration dates are determined by class standing, with seniors registering first, followed by juniors, sophomores, and freshmen. Students should meet with their academic advisor before registering to ensure they are on track to meet degree requirements. Course registration is completed through the student portal.",
            &["registration", "courses", "enrollment", "advisor"],
        ),
        item(
            "financial",
            "Financial Aid Information",
            "The university offers various types of financial aid, including scholarships, grants, loans, and work-study programs. To be considered for financial aid, students must complete the FAFSA by March 1st for the upcoming academic year. Scholarships are awarded based on academic merit, financial need, and other criteria. Students must maintain satisfactory academic progress to continue receiving financial aid.",
            &["financial aid", "scholarships", "fafsa", "loans"],
        ),
        item(
            "financial",
            "Tuition Payment Deadlines",
            "Tuition and fees are due by the first day of classes each semester. Students who fail to pay by the deadline will be charged a late fee and may have a financial hold placed on their account. Payment plans are available for students who need to spread payments throughout the semester. A financial hold prevents students from registering for courses, accessing transcripts, and receiving diplomas.",
            &["tuition", "payment", "deadlines", "holds"],
        ),
        item(
            "campus",
            "Campus Facilities",
            "The university campus includes academic buildings, residence halls, dining facilities, recreation centers, and study spaces. The main library is open 24/7 during the academic year. Computer labs are available in multiple locations across campus. The student recreation center offers fitness equipment, group classes, and intramural sports. All facilities are accessible with a valid student ID card.",
            &["facilities", "campus", "library", "recreation"],
        ),
        item(
            "it",
            "IT Services",
            "University IT services include campus WiFi, computer labs, printing services, and technical support. Students are provided with a university email account and access to various software applications. Technical support is available through the IT Help Desk, which can be contacted by phone, email, or in person. WiFi access requires authentication with student credentials.",
            &["it", "wifi", "technical support", "email"],
        ),
        item(
            "wellness",
            "Student Wellness Services",
            "The university provides comprehensive wellness services, including physical health, mental health, and counseling services. The health center offers primary care, vaccinations, and health education. Counseling services are confidential and include individual therapy, group sessions, and crisis intervention. Students can make appointments online through the student portal or by calling the health center directly.",
            &["wellness", "health", "counseling", "mental health"],
        ),
        item(
            "housing",
            "Housing and Accommodation",
            "On-campus housing includes traditional residence halls, suites, and apartments. Housing applications for the upcoming academic year open in February. Room selection is based on class standing and application date. All residence halls have resident assistants (RAs) who provide support and organize community events. First-year students are generally required to live on campus unless they commute from a parent's home within 30 miles of campus.",
            &["housing", "residence halls", "accommodation", "dormitories"],
        ),
        item(
            "library",
            "Library Resources",
            "The university library system includes the main library and several specialized libraries. Resources include books, journals, databases, and special collections. Librarians are available to assist with research questions and information literacy. Study rooms can be reserved online. Interlibrary loan services allow students to request materials from other libraries. Digital resources are accessible 24/7 through the library website.",
            &["library", "research", "books", "databases"],
        ),
        item(
            "career",
            "Career Services",
            "The Career Center provides resources for career exploration, job and internship searches, resume and cover letter writing, interview preparation, and networking. Career counselors are available for individual appointments. The university hosts career fairs each semester and maintains an online job board. Alumni mentoring programs connect students with professionals in their field of interest.",
            &["career", "jobs", "internships", "resume"],
        ),
    ]
}
