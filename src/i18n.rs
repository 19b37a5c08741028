use crate::model::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

struct Entry {
    key: &'static str,
    en: &'static str,
    zh: &'static str,
}

const fn entry(key: &'static str, en: &'static str, zh: &'static str) -> Entry {
    Entry { key, en, zh }
}

impl Entry {
    fn text(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Zh => self.zh,
        }
    }
}

static TRANSLATIONS: &[Entry] = &[
    // General UI
    entry("appTitle", "Strategy Toolkit", "策略分析工具集"),
    entry("projects", "Projects", "專案"),
    entry("newProject", "New Project", "新增專案"),
    entry("createProject", "Create Project", "建立專案"),
    entry("projectName", "Project Name", "專案名稱"),
    entry("enterProjectName", "Enter project name...", "請輸入專案名稱..."),
    entry("cancel", "Cancel", "取消"),
    entry("create", "Create", "建立"),
    entry("close", "Close", "關閉"),
    entry("noProjectSelected", "No Project Selected", "未選擇專案"),
    entry("selectOrCreateProject", "Select a project from the sidebar or create a new one to begin.", "請從側邊欄選擇一個專案，或建立一個新專案以開始。"),
    entry("canvases", "Canvases", "分析畫布"),
    entry("newCanvas", "New Canvas", "新增畫布"),
    entry("createCanvas", "Create Canvas", "建立畫布"),
    entry("canvasName", "Canvas Name", "畫布名稱"),
    entry("enterCanvasName", "Enter canvas name...", "請輸入畫布名稱..."),
    entry("canvasType", "Canvas Type", "畫布類型"),
    entry("selectCanvasToView", "Select a canvas to view its content.", "請選擇一個畫布以查看其內容。"),
    entry("exportToPDF", "Export to PDF", "匯出為 PDF"),
    entry("language", "Language", "語言"),
    entry("english", "English", "English"),
    entry("traditionalChinese", "Traditional Chinese", "繁體中文"),
    entry("save", "Save", "儲存"),
    entry("edit", "Edit", "編輯"),
    entry("guidedQuestions", "Guided Questions", "引導問題"),
    entry("saveChanges", "Save Changes", "儲存變更"),
    entry("saved", "Saved!", "已儲存！"),
    entry("aiAssistant", "AI Assistant", "AI 助理"),
    entry("askYourQuestion", "Ask your question...", "請輸入您的問題..."),
    entry("send", "Send", "傳送"),
    entry("aiThinking", "AI is thinking...", "AI 正在思考..."),
    entry("welcomeToAI", "Welcome! I'm your AI business assistant. How can I help you analyze your strategy today?", "歡迎！我是您的 AI 商業助理。今天我該如何協助您分析策略？"),
    entry("aiError", "Sorry, I encountered an error. Please try again.", "抱歉，發生錯誤，請再試一次。"),
    entry("editItemTitle", "Edit Section", "編輯區塊"),
    entry("collapseSidebar", "Collapse Sidebar", "收合側邊欄"),
    entry("expandSidebar", "Expand Sidebar", "展開側邊欄"),
    entry("editProject", "Edit Project", "編輯專案"),
    entry("deleteProject", "Delete Project", "刪除專案"),
    entry("deleteProjectConfirm", "Are you sure you want to delete this project and all its canvases? This action cannot be undone.", "您確定要刪除此專案及其所有畫布嗎？此操作無法復原。"),
    entry("editCanvas", "Edit Canvas", "編輯畫布"),
    entry("deleteCanvas", "Delete Canvas", "刪除畫布"),
    entry("deleteCanvasConfirm", "Are you sure you want to delete this canvas? This action cannot be undone.", "您確定要刪除此畫布嗎？此操作無法復原。"),
    entry("update", "Update", "更新"),
    entry("delete", "Delete", "刪除"),
    entry("searchPlaceholder", "Search projects & canvases", "搜尋專案與畫布"),
    entry("project", "Project", "專案"),
    entry("canvas", "Canvas", "畫布"),
    entry("reload", "Reload", "重新載入"),
    entry("saveFailed", "Could not save to disk.", "無法儲存至磁碟。"),
    entry("diagnostics", "Diagnostics", "診斷資訊"),

    // BMC Keys
    entry("bmc_keyPartners", "Key Partners", "關鍵合作夥伴"),
    entry("bmc_keyActivities", "Key Activities", "關鍵活動"),
    entry("bmc_valuePropositions", "Value Propositions", "價值主張"),
    entry("bmc_customerRelationships", "Customer Relationships", "顧客關係"),
    entry("bmc_customerSegments", "Customer Segments", "目標客群"),
    entry("bmc_keyResources", "Key Resources", "關鍵資源"),
    entry("bmc_channels", "Channels", "通路"),
    entry("bmc_costStructure", "Cost Structure", "成本結構"),
    entry("bmc_revenueStreams", "Revenue Streams", "收益流"),

    entry("bmc_keyPartners_placeholder", "Who are our key partners/suppliers? Which key resources are we acquiring from them?", "我們的關鍵合作夥伴/供應商是誰？我們從他們那裡獲取哪些關鍵資源？"),
    entry("bmc_keyActivities_placeholder", "What key activities do our value propositions require? Our distribution channels? Customer relationships?", "我們的價值主張需要哪些關鍵活動？我們的通路、顧客關係需要哪些活動？"),
    entry("bmc_valuePropositions_placeholder", "What value do we deliver to the customer? Which one of our customer's problems are we helping to solve?", "我們為顧客提供什麼價值？我們正在幫助顧客解決哪個問題？"),
    entry("bmc_customerRelationships_placeholder", "What type of relationship does each of our customer segments expect us to establish and maintain with them?", "我們的每個目標客群期望我們與他們建立和維持什麼樣的關係？"),
    entry("bmc_customerSegments_placeholder", "For whom are we creating value? Who are our most important customers?", "我們為誰創造價值？誰是我們最重要的顧客？"),
    entry("bmc_keyResources_placeholder", "What key resources do our value propositions require? (e.g., physical, intellectual, human, financial)", "我們的價值主張需要哪些關鍵資源？（例如：實體、智慧、人力、財務）"),
    entry("bmc_channels_placeholder", "Through which channels do our customer segments want to be reached? How are we reaching them now?", "我們的目標客群希望透過哪些通路接觸？我們現在如何接觸他們？"),
    entry("bmc_costStructure_placeholder", "What are the most important costs inherent in our business model? Which key resources/activities are most expensive?", "我們的商業模式中最重要的成本是什麼？哪些關鍵資源/活動最昂貴？"),
    entry("bmc_revenueStreams_placeholder", "For what value are our customers really willing to pay? For what do they currently pay?", "我們的顧客真正願意為哪些價值付費？他們目前支付什麼？"),

    entry("bmc_keyPartners_guide", "• Who are your key partners?\n• Who are your key suppliers?\n• Which key resources are you acquiring from partners?\n• Which key activities do partners perform?", "• 誰是你的關鍵合作夥伴？\n• 誰是你的關鍵供應商？\n• 你從合作夥伴那裡獲取哪些關鍵資源？\n• 合作夥伴執行哪些關鍵活動？"),
    entry("bmc_keyActivities_guide", "• What key activities do your value propositions require?\n• Your distribution channels?\n• Customer relationships?\n• Revenue streams?", "• 你的價值主張需要哪些關鍵活動？\n• 你的通路？\n• 顧客關係？\n• 收益流？"),
    entry("bmc_valuePropositions_guide", "• What value do you deliver to the customer?\n• Which one of your customer's problems are you helping to solve?\n• What bundles of products and services are you offering to each customer segment?\n• Which customer needs are you satisfying?", "• 你為顧客提供什麼價值？\n• 你正在幫助顧客解決哪個問題？\n• 你為每個目標客群提供什麼樣的產品和服務組合？\n• 你滿足了哪些顧客需求？"),
    entry("bmc_customerRelationships_guide", "• What type of relationship does each of your customer segments expect you to establish and maintain?\n• Which ones have you established?\n• How are they integrated with the rest of your business model?\n• How costly are they?", "• 你的每個目標客群期望你建立和維持什麼樣的關係？\n• 你已經建立了哪些？\n• 它們如何與你的商業模式的其他部分整合？\n• 它們的成本有多高？"),
    entry("bmc_customerSegments_guide", "• For whom are you creating value?\n• Who are your most important customers?\n• Mass Market, Niche Market, Segmented, Diversified, Multi-sided Platform?", "• 你為誰創造價值？\n• 誰是你最重要的顧客？\n• 大眾市場、利基市場、區隔化、多樣化、多邊平台？"),
    entry("bmc_keyResources_guide", "• What key resources do your value propositions require?\n• Physical, Intellectual (brand patents, copyrights, data), Human, Financial?", "• 你的價值主張需要哪些關鍵資源？\n• 實體、智慧（品牌專利、版權、數據）、人力、財務？"),
    entry("bmc_channels_guide", "• Through which channels do your customer segments want to be reached?\n• How are you reaching them now?\n• How are your channels integrated?\n• Which ones work best?", "• 你的目標客群希望透過哪些通路接觸？\n• 你現在如何接觸他們？\n• 你的通路如何整合？\n• 哪些通路效果最好？"),
    entry("bmc_costStructure_guide", "• What are the most important costs inherent in your business model?\n• Which key resources are most expensive?\n• Which key activities are most expensive?", "• 你的商業模式中最重要的成本是什麼？\n• 哪些關鍵資源最昂貴？\n• 哪些關鍵活動最昂貴？"),
    entry("bmc_revenueStreams_guide", "• For what value are your customers really willing to pay?\n• For what do they currently pay?\n• How are they currently paying?\n• How would they prefer to pay?", "• 你的顧客真正願意為哪些價值付費？\n• 他們目前支付什麼？\n• 他們目前如何支付？\n• 他們偏好如何支付？"),

    // PEST Keys
    entry("pest_political", "Political", "政治 (P)"),
    entry("pest_economic", "Economic", "經濟 (E)"),
    entry("pest_social", "Social", "社會 (S)"),
    entry("pest_technological", "Technological", "科技 (T)"),

    entry("pest_political_placeholder", "Government policy, political stability, corruption, foreign trade policy, tax policy, labour law, environmental law, trade restrictions...", "政府政策、政治穩定性、貪腐、對外貿易政策、稅收政策、勞動法、環保法規、貿易限制..."),
    entry("pest_economic_placeholder", "Economic growth, exchange rates, inflation rates, interest rates, disposable income of consumers, unemployment rates...", "經濟成長、匯率、通貨膨脹率、利率、消費者可支配所得、失業率..."),
    entry("pest_social_placeholder", "Population growth rate, age distribution, career attitudes, safety emphasis, health consciousness, lifestyle attitudes, cultural barriers...", "人口增長率、年齡分佈、職業態度、安全重視、健康意識、生活方式態度、文化障礙..."),
    entry("pest_technological_placeholder", "Technology incentives, level of innovation, automation, R&D activity, technological change, technological awareness...", "技術誘因、創新水平、自動化、研發活動、技術變革、技術意識..."),

    entry("pest_political_guide", "• What is the political situation of the country and how can it affect the industry?\n• What are the prevalent tax policies?\n• How will the upcoming elections affect the business environment?", "• 該國的政治局勢如何？它如何影響行業？\n• 現行的稅收政策是什麼？\n• 即將到來的選舉將如何影響商業環境？"),
    entry("pest_economic_guide", "• What are the current and forecasted economic growth rates?\n• What is the level of disposable income and how is it changing?\n• What is the unemployment rate?", "• 當前和預測的經濟增長率是多少？\n• 可支配所得水平如何？它如何變化？\n• 失業率是多少？"),
    entry("pest_social_guide", "• What are the dominant cultural norms and values?\n• What are the demographic trends (age, gender, ethnicity)?\n• What are the consumer attitudes towards your product category?", "• 主要的文化規範和價值觀是什麼？\n• 人口趨勢是什麼（年齡、性別、種族）？\n• 消費者對您的產品類別的態度是什麼？"),
    entry("pest_technological_guide", "• What are the recent technological advancements in your industry?\n• Are there any disruptive technologies on the horizon?\n• What is the level of R&D funding in the sector?", "• 您所在行業最近的技術進步是什麼？\n• 是否有任何顛覆性技術即將出現？\n• 該行業的研發資金水平如何？"),

    // SWOT Keys
    entry("swot_strengths", "Strengths", "優勢 (S)"),
    entry("swot_weaknesses", "Weaknesses", "劣勢 (W)"),
    entry("swot_opportunities", "Opportunities", "機會 (O)"),
    entry("swot_threats", "Threats", "威脅 (T)"),

    entry("swot_strengths_placeholder", "Internal factors that are favorable compared to competitors. e.g., strong brand, loyal customers, unique technology.", "與競爭對手相比有利的內部因素。例如：強勢品牌、忠實客戶、獨特技術。"),
    entry("swot_weaknesses_placeholder", "Internal factors that are unfavorable compared to competitors. e.g., high debt, weak brand, outdated technology.", "與競爭對手相比不利的內部因素。例如：高負債、弱勢品牌、過時技術。"),
    entry("swot_opportunities_placeholder", "External factors that could be exploited to the organization's advantage. e.g., new markets, favorable regulations.", "可被組織利用以獲取優勢的外部因素。例如：新市場、有利的法規。"),
    entry("swot_threats_placeholder", "External factors that could harm the organization. e.g., new competitors, economic downturn, changing customer preferences.", "可能損害組織的外部因素。例如：新競爭者、經濟衰退、顧客偏好改變。"),

    entry("swot_strengths_guide", "• What advantages does your organization have?\n• What do you do better than anyone else?\n• What unique or lowest-cost resources can you draw upon that others can't?", "• 您的組織有哪些優勢？\n• 您比其他人做得更好的是什麼？\n• 您可以利用哪些他人無法利用的獨特或最低成本資源？"),
    entry("swot_weaknesses_guide", "• What could you improve?\n• What should you avoid?\n• What are people in your market likely to see as weaknesses?", "• 您可以改進什麼？\n• 您應該避免什麼？\n• 您市場中的人可能會認為什麼是弱點？"),
    entry("swot_opportunities_guide", "• What good opportunities can you spot?\n• What interesting trends are you aware of?\n• Can you leverage any PEST factors?", "• 您能發現哪些好機會？\n• 您知道哪些有趣的趨勢？\n• 您可以利用任何 PEST 因素嗎？"),
    entry("swot_threats_guide", "• What obstacles do you face?\n• What are your competitors doing?\n• Are quality standards or specifications for your job, products or services changing?", "• 您面臨哪些障礙？\n• 您的競爭對手在做什麼？\n• 您的工作、產品或服務的品質標準或規格是否正在改變？"),

    // STP Keys
    entry("stp_segmentation", "Segmentation", "市場區隔 (S)"),
    entry("stp_targeting", "Targeting", "目標市場 (T)"),
    entry("stp_positioning", "Positioning", "市場定位 (P)"),

    entry("stp_segmentation_placeholder", "Divide the broad market into subsets of consumers who have common needs and priorities. (Demographic, Geographic, Psychographic, Behavioral)", "將廣泛市場劃分為具有共同需求和優先順序的消費者子集。（人口統計、地理、心理、行為）"),
    entry("stp_targeting_placeholder", "Select the most attractive segment(s) to enter. Consider segment size, growth potential, and alignment with your company's objectives.", "選擇最具吸引力的市場區隔進入。考慮區隔規模、增長潛力以及與公司目標的一致性。"),
    entry("stp_positioning_placeholder", "Define how you want to be perceived by your target customers. Create a clear, unique, and desirable image in their minds relative to competitors.", "定義您希望目標客戶如何看待您。在他們心中創造一個相對於競爭對手清晰、獨特且令人嚮往的形象。"),

    entry("stp_segmentation_guide", "• How can you group potential customers?\n• What are the key characteristics of each segment (e.g., age, location, lifestyle)?\n• What are the needs and wants of each segment?", "• 您如何對潛在客戶進行分組？\n• 每個區隔的主要特徵是什麼（例如，年齡、地點、生活方式）？\n• 每個區隔的需求和慾望是什麼？"),
    entry("stp_targeting_guide", "• Which segments are most profitable?\n• Which segments can you serve best?\n• Do you have the resources to target these segments effectively?", "• 哪些區隔最有利可圖？\n• 您能最好地服務哪些區隔？\n• 您有足夠的資源來有效地鎖定這些區隔嗎？"),
    entry("stp_positioning_guide", "• What is your unique selling proposition (USP)?\n• How do you differ from your competitors?\n• What is the key message you want to communicate to your target audience?", "• 您獨特的銷售主張（USP）是什麼？\n• 您與競爭對手有何不同？\n• 您想向目標受眾傳達的關鍵信息是什麼？"),
];

static INDEX: Lazy<HashMap<&'static str, &'static Entry>> =
    Lazy::new(|| TRANSLATIONS.iter().map(|entry| (entry.key, entry)).collect());

/// Looks up `key` for `language`. Unknown keys come back verbatim so a missing
/// string is visible on screen instead of silently blank.
pub fn translate<'a>(key: &'a str, language: Language) -> &'a str {
    match INDEX.get(key) {
        Some(entry) => entry.text(language),
        None => key,
    }
}

#[cfg(test)]
pub fn contains_key(key: &str) -> bool {
    INDEX.contains_key(key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(key, self.language)
    }
}
