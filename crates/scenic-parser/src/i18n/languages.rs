//! Keyword spellings for every supported language.
//!
//! The first spelling of each category is canonical. A trailing `<` marks a
//! spelling that may be glued to the following step text (no whitespace is
//! required after it). The universal `*` step bullet and the text block
//! delimiters are language independent and live in the parent module.

pub(super) struct LanguageData {
    pub(super) code: &'static str,
    pub(super) name: &'static str,
    pub(super) native: &'static str,
    pub(super) feature: &'static [&'static str],
    pub(super) background: &'static [&'static str],
    pub(super) scenario: &'static [&'static str],
    pub(super) scenario_outline: &'static [&'static str],
    pub(super) examples: &'static [&'static str],
    pub(super) given: &'static [&'static str],
    pub(super) when: &'static [&'static str],
    pub(super) then: &'static [&'static str],
    pub(super) and: &'static [&'static str],
    pub(super) but: &'static [&'static str],
}

pub(super) const LANGUAGES: &[LanguageData] = &[
    LanguageData {
        code: "cs",
        name: "Czech",
        native: "Česky",
        feature: &["Požadavek"],
        background: &["Pozadí", "Kontext"],
        scenario: &["Scénář"],
        scenario_outline: &["Náčrt Scénáře", "Osnova scénáře"],
        examples: &["Příklady"],
        given: &["Pokud", "Za předpokladu"],
        when: &["Když"],
        then: &["Pak"],
        and: &["A", "A také"],
        but: &["Ale"],
    },
    LanguageData {
        code: "cy-GB",
        name: "Welsh",
        native: "Cymraeg",
        feature: &["Arwedd"],
        background: &["Cefndir"],
        scenario: &["Scenario"],
        scenario_outline: &["Scenario Amlinellol"],
        examples: &["Enghreifftiau"],
        given: &["Anrhegedig a"],
        when: &["Pryd"],
        then: &["Yna"],
        and: &["A"],
        but: &["Ond"],
    },
    LanguageData {
        code: "da",
        name: "Danish",
        native: "dansk",
        feature: &["Egenskab"],
        background: &["Baggrund"],
        scenario: &["Scenarie"],
        scenario_outline: &["Abstrakt Scenario"],
        examples: &["Eksempler"],
        given: &["Givet"],
        when: &["Når"],
        then: &["Så"],
        and: &["Og"],
        but: &["Men"],
    },
    LanguageData {
        code: "de",
        name: "German",
        native: "Deutsch",
        feature: &["Funktionalität", "Funktion"],
        background: &["Grundlage", "Hintergrund"],
        scenario: &["Szenario", "Beispiel"],
        scenario_outline: &["Szenariogrundriss", "Szenarien"],
        examples: &["Beispiele"],
        given: &["Angenommen", "Gegeben sei", "Gegeben seien"],
        when: &["Wenn"],
        then: &["Dann"],
        and: &["Und"],
        but: &["Aber"],
    },
    LanguageData {
        code: "en",
        name: "English",
        native: "English",
        feature: &["Feature", "Business Need", "Ability"],
        background: &["Background"],
        scenario: &["Scenario", "Example"],
        scenario_outline: &["Scenario Outline", "Scenario Template"],
        examples: &["Examples", "Scenarios"],
        given: &["Given"],
        when: &["When"],
        then: &["Then"],
        and: &["And"],
        but: &["But"],
    },
    LanguageData {
        code: "en-lol",
        name: "LOLCAT",
        native: "LOLCAT",
        feature: &["OH HAI"],
        background: &["B4"],
        scenario: &["MISHUN"],
        scenario_outline: &["MISHUN SRSLY"],
        examples: &["EXAMPLZ"],
        given: &["I CAN HAZ"],
        when: &["WEN"],
        then: &["DEN"],
        and: &["AN"],
        but: &["BUT"],
    },
    LanguageData {
        code: "es",
        name: "Spanish",
        native: "español",
        feature: &["Característica"],
        background: &["Antecedentes"],
        scenario: &["Escenario"],
        scenario_outline: &["Esquema del escenario"],
        examples: &["Ejemplos"],
        given: &["Dado", "Dada", "Dados", "Dadas"],
        when: &["Cuando"],
        then: &["Entonces"],
        and: &["Y", "E"],
        but: &["Pero"],
    },
    LanguageData {
        code: "fr",
        name: "French",
        native: "français",
        feature: &["Fonctionnalité"],
        background: &["Contexte"],
        scenario: &["Scénario"],
        scenario_outline: &["Plan du scénario", "Plan du Scénario"],
        examples: &["Exemples"],
        given: &[
            "Soit",
            "Sachant que",
            "Sachant qu'<",
            "Sachant",
            "Etant donné que",
            "Etant donné qu'<",
            "Etant donné",
            "Etant donnée",
            "Etant donnés",
            "Etant données",
            "Étant donné que",
            "Étant donné qu'<",
            "Étant donné",
            "Étant donnée",
            "Étant donnés",
            "Étant données",
        ],
        when: &["Quand", "Lorsque", "Lorsqu'<"],
        then: &["Alors", "Donc"],
        and: &["Et", "Et que", "Et qu'<"],
        but: &["Mais", "Mais que", "Mais qu'<"],
    },
    LanguageData {
        code: "it",
        name: "Italian",
        native: "italiano",
        feature: &["Funzionalità"],
        background: &["Contesto"],
        scenario: &["Scenario"],
        scenario_outline: &["Schema dello scenario"],
        examples: &["Esempi"],
        given: &["Dato", "Data", "Dati", "Date"],
        when: &["Quando"],
        then: &["Allora"],
        and: &["E"],
        but: &["Ma"],
    },
    LanguageData {
        code: "ja",
        name: "Japanese",
        native: "日本語",
        feature: &["フィーチャ", "機能"],
        background: &["背景"],
        scenario: &["シナリオ"],
        scenario_outline: &[
            "シナリオアウトライン",
            "シナリオテンプレート",
            "テンプレ",
            "シナリオテンプレ",
        ],
        examples: &["例", "サンプル"],
        given: &["前提<"],
        when: &["もし<"],
        then: &["ならば<"],
        and: &["かつ<"],
        but: &["しかし<", "但し<", "ただし<"],
    },
    LanguageData {
        code: "ko",
        name: "Korean",
        native: "한국어",
        feature: &["기능"],
        background: &["배경"],
        scenario: &["시나리오"],
        scenario_outline: &["시나리오 개요"],
        examples: &["예"],
        given: &["조건<", "먼저<"],
        when: &["만일<", "만약<"],
        then: &["그러면<"],
        and: &["그리고<"],
        but: &["하지만<", "단<"],
    },
    LanguageData {
        code: "lv",
        name: "Latvian",
        native: "latviešu",
        feature: &["Funkcionalitāte", "Fīča"],
        background: &["Konteksts", "Situācija"],
        scenario: &["Scenārijs"],
        scenario_outline: &["Scenārijs pēc parauga"],
        examples: &["Piemēri", "Paraugs"],
        given: &["Kad"],
        when: &["Ja"],
        then: &["Tad"],
        and: &["Un"],
        but: &["Bet"],
    },
    LanguageData {
        code: "nl",
        name: "Dutch",
        native: "Nederlands",
        feature: &["Functionaliteit"],
        background: &["Achtergrond"],
        scenario: &["Scenario"],
        scenario_outline: &["Abstract Scenario"],
        examples: &["Voorbeelden"],
        given: &["Gegeven", "Stel"],
        when: &["Als"],
        then: &["Dan"],
        and: &["En"],
        but: &["Maar"],
    },
    LanguageData {
        code: "no",
        name: "Norwegian",
        native: "norsk",
        feature: &["Egenskap"],
        background: &["Bakgrunn"],
        scenario: &["Scenario"],
        scenario_outline: &["Scenariomal", "Abstrakt Scenario"],
        examples: &["Eksempler"],
        given: &["Gitt"],
        when: &["Når"],
        then: &["Så"],
        and: &["Og"],
        but: &["Men"],
    },
    LanguageData {
        code: "pl",
        name: "Polish",
        native: "polski",
        feature: &["Właściwość", "Funkcja", "Aspekt", "Potrzeba biznesowa"],
        background: &["Założenia"],
        scenario: &["Scenariusz"],
        scenario_outline: &["Szablon scenariusza"],
        examples: &["Przykłady"],
        given: &["Zakładając", "Mając"],
        when: &["Jeżeli", "Jeśli", "Gdy", "Kiedy"],
        then: &["Wtedy"],
        and: &["Oraz", "I"],
        but: &["Ale"],
    },
    LanguageData {
        code: "pt",
        name: "Portuguese",
        native: "português",
        feature: &["Funcionalidade", "Característica", "Caracteristica"],
        background: &["Contexto", "Cenário de Fundo", "Cenario de Fundo", "Fundo"],
        scenario: &["Cenário", "Cenario"],
        scenario_outline: &[
            "Esquema do Cenário",
            "Esquema do Cenario",
            "Delineação do Cenário",
            "Delineacao do Cenario",
        ],
        examples: &["Exemplos", "Cenários", "Cenarios"],
        given: &["Dado", "Dada", "Dados", "Dadas"],
        when: &["Quando"],
        then: &["Então", "Entao"],
        and: &["E"],
        but: &["Mas"],
    },
    LanguageData {
        code: "ru",
        name: "Russian",
        native: "русский",
        feature: &["Функция", "Функционал", "Свойство"],
        background: &["Предыстория", "Контекст"],
        scenario: &["Сценарий"],
        scenario_outline: &["Структура сценария"],
        examples: &["Примеры"],
        given: &["Допустим", "Дано", "Пусть"],
        when: &["Если", "Когда"],
        then: &["То", "Тогда"],
        and: &["И", "К тому же", "Также"],
        but: &["Но", "А"],
    },
    LanguageData {
        code: "sv",
        name: "Swedish",
        native: "Svenska",
        feature: &["Egenskap"],
        background: &["Bakgrund"],
        scenario: &["Scenario"],
        scenario_outline: &["Abstrakt Scenario", "Scenariomall"],
        examples: &["Exempel"],
        given: &["Givet"],
        when: &["När"],
        then: &["Så"],
        and: &["Och"],
        but: &["Men"],
    },
    LanguageData {
        code: "zh-CN",
        name: "Chinese simplified",
        native: "简体中文",
        feature: &["功能"],
        background: &["背景"],
        scenario: &["场景", "剧本"],
        scenario_outline: &["场景大纲", "剧本大纲"],
        examples: &["例子"],
        given: &["假如<", "假设<", "假定<"],
        when: &["当<"],
        then: &["那么<"],
        and: &["而且<", "并且<", "同时<"],
        but: &["但是<"],
    },
    LanguageData {
        code: "zh-TW",
        name: "Chinese traditional",
        native: "繁體中文",
        feature: &["功能"],
        background: &["背景"],
        scenario: &["場景", "劇本"],
        scenario_outline: &["場景大綱", "劇本大綱"],
        examples: &["例子"],
        given: &["假如<", "假設<", "假定<"],
        when: &["當<"],
        then: &["那麼<"],
        and: &["而且<", "並且<", "同時<"],
        but: &["但是<"],
    },
];
