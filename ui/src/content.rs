//! Static bilingual copy for every repeated record on the page.
//!
//! Images are paths served by the web shell from its public directory.

use crate::core::Bilingual;

type Text = Bilingual<&'static str>;

const fn tx(en: &'static str, th: &'static str) -> Text {
    Bilingual::new(en, th)
}

#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub title: Text,
    pub text: Text,
    pub image: &'static str,
}

pub const HERO_SLIDES: &[Slide] = &[
    Slide {
        title: tx("Building Thailand's Future", "ร่วมสร้างอนาคตประเทศไทย"),
        text: tx(
            "Construction, engineering and trading services delivered with precision since day one.",
            "บริการก่อสร้าง วิศวกรรม และการค้า ที่ส่งมอบด้วยความแม่นยำตั้งแต่วันแรก",
        ),
        image: "/images/hero/skyline.jpg",
    },
    Slide {
        title: tx("Engineering You Can Trust", "วิศวกรรมที่คุณวางใจได้"),
        text: tx(
            "Experienced engineers and detailers taking every structure from drawing board to handover.",
            "ทีมวิศวกรและผู้ออกแบบรายละเอียดที่มีประสบการณ์ ดูแลทุกโครงสร้างตั้งแต่แบบร่างจนถึงส่งมอบงาน",
        ),
        image: "/images/hero/engineering.jpg",
    },
    Slide {
        title: tx("Safety on Every Site", "ความปลอดภัยในทุกไซต์งาน"),
        text: tx(
            "Weekly inspections and certified crews keep every project running smoothly.",
            "การตรวจสอบทุกสัปดาห์และทีมงานที่ได้รับการรับรอง ทำให้ทุกโครงการดำเนินไปอย่างราบรื่น",
        ),
        image: "/images/hero/site-safety.jpg",
    },
];

pub const PROGRESS_SLIDES: &[Slide] = &[
    Slide {
        title: tx("Trusted Construction Partner", "พันธมิตรด้านการก่อสร้างที่คุณไว้วางใจ"),
        text: tx(
            "Delivering high-quality projects with professionalism and reliability.",
            "เรามุ่งมั่นส่งมอบงานคุณภาพสูง ด้วยความเป็นมืออาชีพและเชื่อถือได้",
        ),
        image: "/images/slide/handshake.jpg",
    },
    Slide {
        title: tx("Building for the Future", "สร้างสรรค์เพื่ออนาคต"),
        text: tx(
            "Combining modern technology with sustainable practices.",
            "ผสมผสานเทคโนโลยีสมัยใหม่กับแนวทางที่ยั่งยืน",
        ),
        image: "/images/slide/future.jpg",
    },
    Slide {
        title: tx("Safety and Quality First", "ความปลอดภัยและคุณภาพมาก่อน"),
        text: tx(
            "Ensuring every project meets the highest safety and quality standards.",
            "เรายึดมั่นในมาตรฐานสูงสุดของความปลอดภัยและคุณภาพในทุกโครงการ",
        ),
        image: "/images/slide/safety.avif",
    },
];

pub const WHO_WE_ARE_SLIDES: &[&str] = &[
    "/images/who/slide1.png",
    "/images/who/slide2.png",
    "/images/who/slide3.png",
    "/images/who/slide4.png",
];

pub const WHO_WE_ARE_VIDEO: &str = "/media/main.mp4";

pub const CULTURE_IMAGES: &[&str] = &[
    "/images/culture/team.jpg",
    "/images/culture/site-briefing.jpg",
    "/images/culture/volunteering.jpg",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Hammer,
    Ruler,
    Cog,
    Truck,
    Layers,
    Cart,
}

impl ServiceIcon {
    /// Inline SVG path data (24×24 viewBox, stroked).
    pub fn path(self) -> &'static str {
        match self {
            ServiceIcon::Hammer => "M15 12l-8.5 8.5a2.1 2.1 0 0 1-3-3L12 9 M17.6 14.6L22 10.2 M20 15l2-2 M12 9l3-3 4 4-3 3",
            ServiceIcon::Ruler => "M21.3 8.7L8.7 21.3a2.4 2.4 0 0 1-3.4 0l-2.6-2.6a2.4 2.4 0 0 1 0-3.4L15.3 2.7a2.4 2.4 0 0 1 3.4 0l2.6 2.6a2.4 2.4 0 0 1 0 3.4z M7.5 10.5l2 2 M10.5 7.5l2 2 M13.5 4.5l2 2 M4.5 13.5l2 2",
            ServiceIcon::Cog => "M12 20a8 8 0 1 0 0-16 8 8 0 0 0 0 16z M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z M12 2v2 M12 22v-2 M2 12h2 M22 12h-2",
            ServiceIcon::Truck => "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2 M15 18H9 M19 18h2a1 1 0 0 0 1-1v-3.6a1 1 0 0 0-.2-.6l-3.5-4.4A1 1 0 0 0 17.5 8H14 M7 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z M17 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ServiceIcon::Layers => "M12 2L2 7l10 5 10-5-10-5z M2 17l10 5 10-5 M2 12l10 5 10-5",
            ServiceIcon::Cart => "M8 22a1 1 0 1 0 0-2 1 1 0 0 0 0 2z M19 22a1 1 0 1 0 0-2 1 1 0 0 0 0 2z M2 2h2l2.7 12.4a2 2 0 0 0 2 1.6h9.7a2 2 0 0 0 2-1.6L22 6H5.1",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: Text,
    pub description: Text,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: ServiceIcon::Hammer,
        title: tx("Construction", "งานก่อสร้าง"),
        description: tx(
            "Delivering high-quality construction projects with precision, safety, and sustainability at every stage.",
            "ดำเนินโครงการก่อสร้างคุณภาพสูงด้วยความแม่นยำ ปลอดภัย และยั่งยืนในทุกขั้นตอน",
        ),
    },
    Service {
        icon: ServiceIcon::Ruler,
        title: tx("Detailing", "งานออกแบบรายละเอียด"),
        description: tx(
            "Providing expert structural detailing and fabrication drawings for efficient and accurate builds.",
            "ให้บริการจัดทำแบบโครงสร้างและแบบผลิตชิ้นงานอย่างมืออาชีพเพื่อการก่อสร้างที่มีประสิทธิภาพ",
        ),
    },
    Service {
        icon: ServiceIcon::Cog,
        title: tx("Engineering", "วิศวกรรม"),
        description: tx(
            "Offering complete engineering solutions from design to execution by experienced professionals.",
            "ให้บริการวิศวกรรมครบวงจร ตั้งแต่การออกแบบไปจนถึงการดำเนินงาน โดยทีมงานผู้เชี่ยวชาญ",
        ),
    },
    Service {
        icon: ServiceIcon::Truck,
        title: tx("Rental", "งานให้เช่า"),
        description: tx(
            "Supplying modern and well-maintained equipment for construction and industrial operations.",
            "ให้บริการเช่าอุปกรณ์และเครื่องมือก่อสร้างที่ทันสมัยและดูแลรักษาอย่างดี",
        ),
    },
    Service {
        icon: ServiceIcon::Layers,
        title: tx("ST&T", "ST&T"),
        description: tx(
            "Providing specialized services in Steel, Technology, and Testing to ensure quality and reliability.",
            "ให้บริการเฉพาะด้านในงานเหล็ก เทคโนโลยี และการทดสอบ เพื่อคุณภาพและความน่าเชื่อถือสูงสุด",
        ),
    },
    Service {
        icon: ServiceIcon::Cart,
        title: tx("Trading", "งานเทรดดิ้ง"),
        description: tx(
            "Distributing high-quality construction materials and industrial products across multiple sectors.",
            "จำหน่ายวัสดุก่อสร้างและผลิตภัณฑ์อุตสาหกรรมคุณภาพสูงให้กับหลายภาคส่วน",
        ),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Affiliate {
    pub name: Text,
    pub logo: &'static str,
}

pub const AFFILIATES: &[Affiliate] = &[
    Affiliate {
        name: tx("Construction", "ก่อสร้าง"),
        logo: "/images/icon/construction.svg",
    },
    Affiliate {
        name: tx("Detailing", "รายละเอียดโครงสร้าง"),
        logo: "/images/icon/detailing.svg",
    },
    Affiliate {
        name: tx("Engineering", "วิศวกรรม"),
        logo: "/images/icon/engineering.svg",
    },
    Affiliate {
        name: tx("Rental", "ให้เช่าเครื่องจักร"),
        logo: "/images/icon/rental.svg",
    },
    Affiliate {
        name: tx("ST&T", "บริการเทคโนโลยี"),
        logo: "/images/icon/st-t.svg",
    },
    Affiliate {
        name: tx("Trading", "การค้า"),
        logo: "/images/icon/trading.svg",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct CompanyFigure {
    pub value: u32,
    pub suffix: &'static str,
    pub label: Text,
}

pub const COMPANY_FIGURES: &[CompanyFigure] = &[
    CompanyFigure {
        value: 10,
        suffix: "+",
        label: tx("Years of experience", "ปีแห่งประสบการณ์"),
    },
    CompanyFigure {
        value: 500,
        suffix: "+",
        label: tx("Projects delivered", "โครงการที่ส่งมอบ"),
    },
    CompanyFigure {
        value: 1200,
        suffix: "",
        label: tx("Engineers and staff", "วิศวกรและพนักงาน"),
    },
    CompanyFigure {
        value: 6,
        suffix: "",
        label: tx("Affiliated companies", "บริษัทในเครือ"),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct NewsArticle {
    pub title: Text,
    pub excerpt: Text,
    pub date: Text,
    pub category: Text,
    pub image: &'static str,
}

pub const NEWS: &[NewsArticle] = &[
    NewsArticle {
        title: tx(
            "Chanmr Wins Excellence Award for Digital Transformation",
            "Chanmr ได้รับรางวัลความเป็นเลิศด้านการเปลี่ยนแปลงดิจิทัล",
        ),
        excerpt: tx(
            "Recognition for outstanding achievement in helping Thai enterprises modernize their operations through innovative digital solutions.",
            "การยอมรับในความสำเร็จที่โดดเด่นในการช่วยองค์กรไทยปรับปรุงการดำเนินงานผ่านโซลูชันดิจิทัลที่เป็นนวัตกรรม",
        ),
        date: tx("May 15, 2024", "15 พฤษภาคม 2567"),
        category: tx("Awards", "รางวัล"),
        image: "/images/news/1.jpg",
    },
    NewsArticle {
        title: tx(
            "New Partnership Expands ASEAN Market Presence",
            "ความร่วมมือใหม่ขยายการแสดงตนในตลาดอาเซียน",
        ),
        excerpt: tx(
            "Strategic collaboration strengthens our regional consulting capabilities and brings world-class expertise to Southeast Asian businesses.",
            "ความร่วมมือเชิงกลยุทธ์เสริมสร้างความสามารถในการให้คำปรึกษาในภูมิภาคและนำความเชี่ยวชาญระดับโลกมาสู่ธุรกิจในเอเชียตะวันออกเฉียงใต้",
        ),
        date: tx("April 28, 2024", "28 เมษายน 2567"),
        category: tx("Partnership", "ความร่วมมือ"),
        image: "/images/news/2.jpg",
    },
    NewsArticle {
        title: tx(
            "Sustainability in Thai Manufacturing: A 2024 Outlook",
            "ความยั่งยืนในการผลิตไทย: มุมมอง 2567",
        ),
        excerpt: tx(
            "Explore key trends and strategies for integrating sustainable practices into manufacturing operations across Thailand.",
            "สำรวจแนวโน้มและกลยุทธ์หลักในการบูรณาการแนวทางปฏิบัติที่ยั่งยืนในการดำเนินงานการผลิตทั่วประเทศไทย",
        ),
        date: tx("April 12, 2024", "12 เมษายน 2567"),
        category: tx("Insights", "ข้อมูลเชิงลึก"),
        image: "/images/news/3.jpg",
    },
    NewsArticle {
        title: tx(
            "New Project Launch: Green Construction Initiative",
            "เปิดตัวโครงการ Green Construction Initiative",
        ),
        excerpt: tx(
            "A new step toward sustainable design and eco-friendly construction for urban developments in Bangkok.",
            "ก้าวใหม่สู่การออกแบบและการก่อสร้างที่เป็นมิตรต่อสิ่งแวดล้อม สำหรับการพัฒนาเมืองในอนาคต",
        ),
        date: tx("June 01, 2024", "1 มิถุนายน 2567"),
        category: tx("Project", "โครงการ"),
        image: "/images/news/4.jpg",
    },
    NewsArticle {
        title: tx(
            "Employee Spotlight: Meet Our Engineering Team",
            "เบื้องหลังทีมวิศวกรของเรา",
        ),
        excerpt: tx(
            "Behind every great structure is a passionate team. Get to know the engineers who make it happen.",
            "ทุกโครงสร้างที่ยิ่งใหญ่ มาจากทีมงานที่มุ่งมั่น มาทำความรู้จักกับทีมวิศวกรของเรากันเถอะ",
        ),
        date: tx("June 15, 2024", "15 มิถุนายน 2567"),
        category: tx("People", "บุคลากร"),
        image: "/images/news/5.jpg",
    },
    NewsArticle {
        title: tx("Digital Engineering Trends 2025", "เทรนด์วิศวกรรมดิจิทัล 2025"),
        excerpt: tx(
            "Discover how AI and smart design tools are transforming the future of construction management.",
            "ค้นพบว่า AI และเครื่องมือออกแบบอัจฉริยะกำลังเปลี่ยนอนาคตของการจัดการก่อสร้างอย่างไร",
        ),
        date: tx("July 10, 2024", "10 กรกฎาคม 2567"),
        category: tx("Tech", "เทคโนโลยี"),
        image: "/images/news/6.jpg",
    },
];

/// A post in the mock social feed. There is no live integration.
#[derive(Debug, Clone, Copy)]
pub struct SocialPost {
    pub id: &'static str,
    pub message: Text,
    /// RFC 3339 timestamp.
    pub created_at: &'static str,
    pub picture: Option<&'static str>,
    pub permalink: &'static str,
}

pub const SOCIAL_POSTS: &[SocialPost] = &[
    SocialPost {
        id: "1",
        message: tx(
            "🏗️ Our latest project, a modern logistics warehouse, is almost complete! Stay tuned for the grand opening.",
            "🏗️ โครงการล่าสุดของเรา คลังสินค้าลอจิสติกส์สมัยใหม่ กำลังจะเสร็จสมบูรณ์แล้ว! รอติดตามวันเปิดตัวเร็ว ๆ นี้",
        ),
        created_at: "2025-10-07T09:00:00Z",
        picture: Some("/images/social/warehouse.jpg"),
        permalink: "https://www.facebook.com/ChanMR.GROUP/",
    },
    SocialPost {
        id: "2",
        message: tx(
            "👷 Safety first! Our team conducts weekly inspections to ensure every project runs smoothly.",
            "👷 ความปลอดภัยมาก่อนเสมอ! ทีมของเราตรวจสอบความปลอดภัยทุกสัปดาห์เพื่อให้ทุกโครงการดำเนินไปอย่างราบรื่น",
        ),
        created_at: "2025-10-06T14:30:00Z",
        picture: Some("/images/social/inspection.jpg"),
        permalink: "https://www.facebook.com/ChanMR.GROUP/",
    },
    SocialPost {
        id: "3",
        message: tx(
            "🌱 Building a greener future: we're integrating eco-friendly materials in every project.",
            "🌱 สร้างอนาคตที่ยั่งยืน เรานำวัสดุที่เป็นมิตรต่อสิ่งแวดล้อมมาใช้ในทุกโครงการ",
        ),
        created_at: "2025-10-05T18:45:00Z",
        picture: None,
        permalink: "https://www.facebook.com/ChanMR.GROUP/",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FaqItem {
    pub question: Text,
    pub answer: Text,
}

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: tx(
            "What services does Chan Mr Group provide?",
            "บริษัท Chan Mr Group ให้บริการด้านใดบ้าง?",
        ),
        answer: tx(
            "We offer comprehensive construction services including civil, structural, and architectural works with a focus on quality and safety.",
            "เรามีบริการรับเหมาก่อสร้างครบวงจร ทั้งงานโยธา โครงสร้าง และสถาปัตยกรรม โดยเน้นคุณภาพและความปลอดภัยเป็นหลัก",
        ),
    },
    FaqItem {
        question: tx(
            "How long has the company been operating?",
            "บริษัทเปิดดำเนินการมานานเท่าไรแล้ว?",
        ),
        answer: tx(
            "Chan Mr Group has been operating for over 10 years, delivering trusted and professional construction solutions across Thailand.",
            "Chan Mr Group ดำเนินธุรกิจมากว่า 10 ปี ด้วยความเชื่อมั่นและความเป็นมืออาชีพในโครงการก่อสร้างทั่วประเทศไทย",
        ),
    },
    FaqItem {
        question: tx(
            "Do you handle both private and government projects?",
            "รับงานภาครัฐและเอกชนหรือไม่?",
        ),
        answer: tx(
            "Yes, we specialize in both private and public sector construction projects, ensuring compliance and high standards.",
            "รับทั้งโครงการภาครัฐและเอกชน โดยเรามีมาตรฐานในการทำงานตามข้อกำหนดและความปลอดภัยอย่างเคร่งครัด",
        ),
    },
    FaqItem {
        question: tx(
            "How can I request a project quotation?",
            "สามารถขอใบเสนอราคาได้อย่างไร?",
        ),
        answer: tx(
            "You can contact us through our website or email. Our team will respond promptly to discuss your project requirements.",
            "สามารถติดต่อเราได้ผ่านทางเว็บไซต์หรืออีเมล ทีมงานจะติดต่อกลับโดยเร็วเพื่อพูดคุยรายละเอียดโครงการของคุณ",
        ),
    },
];

/// A main-menu entry and the links shown in its dropdown panel.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub label: Text,
    pub blurb: Text,
    pub links: &'static [Text],
}

pub const MAIN_MENU: &[MenuEntry] = &[
    MenuEntry {
        label: tx("Home", "หน้าแรก"),
        blurb: tx(
            "Everything CHAN MR Group builds, in one place.",
            "ทุกสิ่งที่ชาญ เอ็มอาร์ กรุ๊ป สร้างสรรค์ ในที่เดียว",
        ),
        links: &[
            tx("Highlights", "ไฮไลต์"),
            tx("Latest news", "ข่าวล่าสุด"),
            tx("Facebook updates", "อัปเดตจาก Facebook"),
        ],
    },
    MenuEntry {
        label: tx("About Us", "เกี่ยวกับเรา"),
        blurb: tx(
            "Our vision, our people and the companies of the group.",
            "วิสัยทัศน์ บุคลากร และบริษัทในเครือของเรา",
        ),
        links: &[
            tx("Company profile", "ข้อมูลบริษัท"),
            tx("Vision", "วิสัยทัศน์"),
            tx("Affiliated companies", "บริษัทในเครือ"),
            tx("Culture", "วัฒนธรรมองค์กร"),
        ],
    },
    MenuEntry {
        label: tx("Services", "บริการ"),
        blurb: tx(
            "Construction, detailing, engineering, rental, ST&T and trading.",
            "ก่อสร้าง ออกแบบรายละเอียด วิศวกรรม ให้เช่า ST&T และการค้า",
        ),
        links: &[
            tx("Construction", "งานก่อสร้าง"),
            tx("Detailing", "งานออกแบบรายละเอียด"),
            tx("Engineering", "วิศวกรรม"),
            tx("Rental", "งานให้เช่า"),
            tx("Trading", "งานเทรดดิ้ง"),
        ],
    },
    MenuEntry {
        label: tx("Projects", "โครงการ"),
        blurb: tx(
            "Ongoing and completed work across Thailand.",
            "ผลงานที่กำลังดำเนินการและแล้วเสร็จทั่วประเทศไทย",
        ),
        links: &[
            tx("Ongoing projects", "โครงการที่กำลังดำเนินการ"),
            tx("Completed projects", "โครงการที่แล้วเสร็จ"),
            tx("Case studies", "กรณีศึกษา"),
        ],
    },
    MenuEntry {
        label: tx("Contact", "ติดต่อเรา"),
        blurb: tx(
            "Request a quotation or talk to our team.",
            "ขอใบเสนอราคาหรือพูดคุยกับทีมงานของเรา",
        ),
        links: &[
            tx("Request a quotation", "ขอใบเสนอราคา"),
            tx("Careers", "ร่วมงานกับเรา"),
            tx("Newsletter", "จดหมายข่าว"),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FooterColumn {
    pub title: Text,
    pub links: &'static [Text],
}

impl FooterColumn {
    /// Long columns split into two sub-columns.
    pub fn is_wide(&self) -> bool {
        self.links.len() > 5
    }
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: tx("Services", "บริการ"),
        links: &[
            tx("Construction", "งานก่อสร้าง"),
            tx("Mechanical Engineering", "วิศวกรรมเครื่องกล"),
            tx("Electrical Engineering", "วิศวกรรมไฟฟ้า"),
            tx("System Design", "การออกแบบระบบ"),
            tx("Maintenance", "งานบำรุงรักษา"),
            tx("Ongoing Projects", "โครงการที่กำลังดำเนินการ"),
            tx("Completed Projects", "โครงการที่แล้วเสร็จ"),
            tx("Case Studies", "กรณีศึกษา"),
            tx("Innovation", "นวัตกรรม"),
        ],
    },
    FooterColumn {
        title: tx("About Us", "เกี่ยวกับเรา"),
        links: &[
            tx("Company Profile", "ข้อมูลบริษัท"),
            tx("Careers", "ร่วมงานกับเรา"),
            tx("Contact Us", "ติดต่อเรา"),
            tx("Corporate Responsibility", "ความรับผิดชอบต่อสังคม"),
            tx("Investors", "นักลงทุนสัมพันธ์"),
        ],
    },
];

pub const LEGAL_LINKS: &[Text] = &[
    tx("Privacy", "ความเป็นส่วนตัว"),
    tx("Terms", "ข้อกำหนด"),
    tx("Security", "ความปลอดภัย"),
    tx("Certifications", "การรับรอง"),
    tx("Sitemap", "แผนผังเว็บไซต์"),
    tx("Cookie Preferences", "การตั้งค่าคุกกี้"),
];
