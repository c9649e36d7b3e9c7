//! Display data for the page. Treated as externally supplied: swap this
//! module wholesale when the workshop changes.

use crate::components::radar::RadarData;

pub struct Speaker {
	pub name: &'static str,
	pub role: &'static str,
	pub organization: &'static str,
}

pub struct Session {
	pub time: &'static str,
	pub title: &'static str,
	pub speaker: Option<&'static str>,
}

pub struct Topic {
	pub title: &'static str,
	pub blurb: &'static str,
}

pub struct ScheduleDay {
	pub label: &'static str,
	pub sessions: &'static [Session],
}

pub const WORKSHOP_TITLE: &str =
	"Quantum Computing: Fundamentals, Current Research, and Future Paths";
pub const WORKSHOP_TAGLINE: &str = "A three-day faculty development workshop equipping educators \
	with the latest advancements in Quantum Computing, in the International Year of Quantum.";
pub const WORKSHOP_DATES: &str = "16-18 July 2025";
pub const WORKSHOP_VENUE: &str = "Easwari Engineering College, Chennai";
/// ISO-8601 local instant the countdown targets.
pub const WORKSHOP_START: &str = "2025-07-16T09:00:00";
pub const CONTACT_EMAIL: &str = "quantum2025@eec.srmrmp.edu.in";

pub const SPEAKERS: &[Speaker] = &[
	Speaker {
		name: "Dr. Prabha Mani",
		role: "Professor, Quantum Information",
		organization: "IIT Madras",
	},
	Speaker {
		name: "Johnbasco Vijay Anand",
		role: "Quantum Solutions Architect",
		organization: "IBM Quantum",
	},
	Speaker {
		name: "Dr. Kanaga Suba Raja S",
		role: "Head, Computing Technologies",
		organization: "Easwari Engineering College",
	},
	Speaker {
		name: "Dr. K. Rajalakshmi",
		role: "Associate Professor, Photonics",
		organization: "SSN College of Engineering",
	},
	Speaker {
		name: "Ms. Janani A",
		role: "Research Scholar, Quantum Algorithms",
		organization: "Anna University",
	},
];

pub const TOPICS: &[Topic] = &[
	Topic {
		title: "Quantum Computing Fundamentals",
		blurb: "Qubits, superposition and entanglement from first principles.",
	},
	Topic {
		title: "Current Research",
		blurb: "Where the field is moving in the declared Year of Quantum.",
	},
	Topic {
		title: "Quantum Algorithms",
		blurb: "Shor, Grover and the variational family, with worked examples.",
	},
	Topic {
		title: "Future Paths",
		blurb: "Error correction, networking and the road to fault tolerance.",
	},
	Topic {
		title: "Industry Use Cases",
		blurb: "Optimization, chemistry and finance workloads running today.",
	},
	Topic {
		title: "Interactive Sessions",
		blurb: "Hands-on circuits on simulators and real cloud hardware.",
	},
];

pub const SCHEDULE: &[ScheduleDay] = &[
	ScheduleDay {
		label: "Day 1",
		sessions: &[
			Session {
				time: "09:00",
				title: "Inauguration and keynote",
				speaker: Some("Dr. Prabha Mani"),
			},
			Session {
				time: "11:00",
				title: "Qubits and superposition",
				speaker: Some("Dr. K. Rajalakshmi"),
			},
			Session {
				time: "14:00",
				title: "Lab: first circuits on a simulator",
				speaker: Some("Ms. Janani A"),
			},
		],
	},
	ScheduleDay {
		label: "Day 2",
		sessions: &[
			Session {
				time: "09:30",
				title: "Quantum algorithms in depth",
				speaker: Some("Dr. Prabha Mani"),
			},
			Session {
				time: "11:30",
				title: "Current research landscape",
				speaker: Some("Dr. Kanaga Suba Raja S"),
			},
			Session {
				time: "14:00",
				title: "Lab: running on cloud hardware",
				speaker: Some("Johnbasco Vijay Anand"),
			},
		],
	},
	ScheduleDay {
		label: "Day 3",
		sessions: &[
			Session {
				time: "09:30",
				title: "Industry use cases",
				speaker: Some("Johnbasco Vijay Anand"),
			},
			Session {
				time: "11:30",
				title: "Future paths and panel discussion",
				speaker: None,
			},
			Session {
				time: "15:00",
				title: "Valedictory and certificates",
				speaker: None,
			},
		],
	},
];

/// Research momentum per topic area, 2020 through 2024.
pub fn radar_data() -> RadarData {
	RadarData {
		categories: vec!["AI", "Quantum", "Robotics", "Biotech", "Energy", "Materials"],
		series: vec![
			(2020, vec![55.0, 28.0, 40.0, 35.0, 30.0, 25.0]),
			(2021, vec![62.0, 34.0, 45.0, 42.0, 38.0, 30.0]),
			(2022, vec![70.0, 45.0, 48.0, 50.0, 47.0, 38.0]),
			(2023, vec![82.0, 58.0, 52.0, 57.0, 55.0, 46.0]),
			(2024, vec![90.0, 74.0, 58.0, 63.0, 64.0, 55.0]),
		],
	}
}
