//! The five Job Zones, a fixed classification of how much preparation an occupation needs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobZone {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub education: &'static str,
    pub experience: &'static str,
    pub training: &'static str,
    pub examples: &'static str,
    pub svp_range: &'static str,
}

pub const JOB_ZONES: [JobZone; 5] = [
    JobZone {
        id: 1,
        title: "Job Zone One: Little or No Preparation Needed",
        description: "Occupations that need little or no preparation",
        education: "Some of these occupations may require a high school diploma or GED certificate.",
        experience: "Little or no previous work-related skill, knowledge, or experience is needed for these occupations. For example, a person can become a waiter or waitress even if he/she has never worked before.",
        training: "Employees in these occupations need anywhere from a few days to a few months of training. Usually, an experienced worker could show you how to do the job.",
        examples: "These occupations involve following instructions and helping others. Examples include agricultural equipment operators, dishwashers, floor sanders and finishers, landscaping and groundskeeping workers, logging equipment operators, baristas, and maids and housekeeping cleaners.",
        svp_range: "Below 4.0",
    },
    JobZone {
        id: 2,
        title: "Job Zone Two: Some Preparation Needed",
        description: "Occupations that need some preparation",
        education: "These occupations usually require a high school diploma.",
        experience: "Some previous work-related skill, knowledge, or experience is usually needed. For example, a teller would benefit from experience working directly with the public.",
        training: "Employees in these occupations need anywhere from a few months to one year of working with experienced employees. A recognized apprenticeship program may be associated with these occupations.",
        examples: "These occupations often involve using your knowledge and skills to help others. Examples include orderlies, counter and rental clerks, customer service representatives, security guards, upholsterers, tellers, and dental laboratory technicians.",
        svp_range: "4.0 to < 6.0",
    },
    JobZone {
        id: 3,
        title: "Job Zone Three: Medium Preparation Needed",
        description: "Occupations that need medium preparation",
        education: "Most occupations in this zone require training in vocational schools, related on-the-job experience, or an associate's degree.",
        experience: "Previous work-related skill, knowledge, or experience is required for these occupations. For example, an electrician must have completed three or four years of apprenticeship or several years of vocational training, and often must have passed a licensing exam, in order to perform the job.",
        training: "Employees in these occupations usually need one or two years of training involving both on-the-job experience and informal training with experienced workers. A recognized apprenticeship program may be associated with these occupations.",
        examples: "These occupations usually involve using communication and organizational skills to coordinate, supervise, manage, or train others to accomplish goals. Examples include hydroelectric production managers, desktop publishers, electricians, agricultural technicians, barbers, court reporters and simultaneous captioners, and medical assistants.",
        svp_range: "6.0 to < 7.0",
    },
    JobZone {
        id: 4,
        title: "Job Zone Four: Considerable Preparation Needed",
        description: "Occupations that need considerable preparation",
        education: "Most of these occupations require a four-year bachelor's degree, but some do not.",
        experience: "A considerable amount of work-related skill, knowledge, or experience is needed for these occupations. For example, an accountant must complete four years of college and work for several years in accounting to be considered qualified.",
        training: "Employees in these occupations usually need several years of work-related experience, on-the-job training, and/or vocational training.",
        examples: "Many of these occupations involve coordinating, supervising, managing, or training others. Examples include real estate brokers, sales managers, database administrators, graphic designers, conservation scientists, art directors, and cost estimators.",
        svp_range: "7.0 to < 8.0",
    },
    JobZone {
        id: 5,
        title: "Job Zone Five: Extensive Preparation Needed",
        description: "Occupations that need extensive preparation",
        education: "Most of these occupations require graduate school. For example, they may require a master's degree, and some require a Ph.D., M.D., or J.D. (law degree).",
        experience: "Extensive skill, knowledge, and experience are needed for these occupations. Many require more than five years of experience. For example, surgeons must complete four years of college and an additional five to seven years of specialized medical training to be able to do their job.",
        training: "Employees may need some on-the-job training, but most of these occupations assume that the person will already have the required skills, knowledge, work-related experience, and/or training.",
        examples: "These occupations often involve coordinating, training, supervising, or managing the activities of others to accomplish goals. Very advanced communication and organizational skills are required. Examples include pharmacists, lawyers, astronomers, biologists, clergy, physician assistants, and veterinarians.",
        svp_range: "8.0 and above",
    },
];

pub fn job_zone(id: u8) -> Option<&'static JobZone> {
    JOB_ZONES.iter().find(|z| z.id == id)
}
