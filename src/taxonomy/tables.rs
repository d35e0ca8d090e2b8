//! 21カテゴリの固定分類表
//!
//! キーワード・問番号範囲・子カテゴリは過去問の出題傾向から手作業で
//! 整備したもの。定義順がタイブレークの優先順になる。

use super::{Category, Subcategory};
use crate::models::Field;

pub static TAXONOMY: &[Category] = &[
    Category {
        name: "基礎理論",
        keywords: &[
            "2進", "補数", "論理式", "論理演算", "ブール", "カルノー",
            "確率", "標準偏差", "正規分布", "分散", "期待値", "ベイズ",
            "行列", "グラフ理論", "BNF", "オートマトン", "形式言語",
            "情報量", "エントロピー", "符号化", "ハミング",
            "サンプリング", "標本化", "PCM", "浮動小数点", "誤差",
            "集合", "ド・モルガン", "待ち行列", "M/M/1", "ポアソン",
            "機械学習", "ニューラルネットワーク", "ディープラーニング",
            "回帰", "クラスタリング", "教師あり", "教師なし",
            "逆行列", "固有値", "最尤", "ユークリッド",
            "交差検証", "ROC", "偽陽性",
            "量子", "ビット列", "基数変換",
        ],
        range: (1, 10),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "離散数学",
                keywords: &["論理式", "集合", "ブール", "カルノー", "ド・モルガン", "命題"],
            },
            Subcategory {
                name: "確率・統計",
                keywords: &["確率", "分散", "標準偏差", "正規分布", "ベイズ", "期待値"],
            },
            Subcategory {
                name: "数値表現・計算",
                keywords: &["2進", "補数", "浮動小数点", "基数変換", "誤差", "ビット列"],
            },
            Subcategory {
                name: "情報理論",
                keywords: &["情報量", "エントロピー", "符号化", "ハミング", "CRC", "サンプリング", "標本化", "PCM"],
            },
            Subcategory {
                name: "AI・機械学習",
                keywords: &["機械学習", "ニューラル", "ディープラーニング", "回帰", "交差検証", "ROC", "教師あり", "クラスタリング"],
            },
            Subcategory {
                name: "待ち行列・応用数学",
                keywords: &["待ち行列", "M/M/1", "ポアソン", "行列", "逆行列"],
            },
        ],
    },
    Category {
        name: "アルゴリズムとプログラミング",
        keywords: &[
            "アルゴリズム", "ソート", "探索", "二分探索", "ハッシュ",
            "スタック", "キュー", "リスト", "ヒープ",
            "再帰", "計算量", "整列", "連結リスト",
            "プログラム言語", "コンパイラ", "インタプリタ", "リンカ",
            "オブジェクト指向", "関数型", "変数", "配列",
            "XML", "正規表現", "マークアップ",
            "逆ポーランド", "後置表記", "ハフマン",
            "2分探索木", "2分木", "深さ優先", "幅優先",
            "擬似言語", "トレース", "流れ図",
        ],
        range: (3, 12),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "データ構造",
                keywords: &["スタック", "キュー", "リスト", "木", "ヒープ", "連結リスト", "2分探索木", "2分木"],
            },
            Subcategory {
                name: "探索・整列",
                keywords: &["ソート", "探索", "二分探索", "ハッシュ", "整列", "クイックソート", "マージソート"],
            },
            Subcategory {
                name: "プログラム言語・処理系",
                keywords: &["コンパイラ", "インタプリタ", "リンカ", "プログラム言語", "オブジェクト指向", "関数型"],
            },
            Subcategory {
                name: "計算量・アルゴリズム設計",
                keywords: &["計算量", "再帰", "逆ポーランド", "ハフマン", "擬似言語", "流れ図", "深さ優先", "幅優先"],
            },
        ],
    },
    Category {
        name: "コンピュータ構成要素",
        keywords: &[
            "CPU", "プロセッサ", "レジスタ", "キャッシュ", "メモリ",
            "バス", "割込み", "パイプライン", "スーパスカラ", "VLIW",
            "CISC", "RISC", "アドレッシング", "クロック",
            "主記憶", "DMA", "磁気ディスク", "SSD", "RAID",
            "GPU", "FPGA", "SoC", "マイクロプロセッサ",
            "フラッシュメモリ", "実効アクセス", "ヒット率",
            "USB", "シリアル", "パラレル",
            "ファイバチャネル", "NAS", "SAN",
        ],
        range: (8, 15),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "プロセッサ",
                keywords: &["CPU", "パイプライン", "RISC", "CISC", "クロック", "スーパスカラ", "VLIW", "プロセッサ", "命令"],
            },
            Subcategory {
                name: "メモリ",
                keywords: &["キャッシュ", "主記憶", "ヒット率", "実効アクセス", "フラッシュメモリ", "メモリ"],
            },
            Subcategory {
                name: "入出力・ストレージ",
                keywords: &["磁気ディスク", "SSD", "RAID", "USB", "NAS", "SAN", "ファイバチャネル"],
            },
        ],
    },
    Category {
        name: "システム構成要素",
        keywords: &[
            "信頼性", "MTBF", "MTTR", "稼働率", "可用性",
            "フォールトトレラント", "フェールセーフ", "フェールソフト",
            "デュプレックス", "ホットスタンバイ", "コールドスタンバイ",
            "負荷分散", "クラスタ",
            "スループット", "レスポンス", "ターンアラウンド",
            "ベンチマーク", "性能評価", "並列処理",
            "冗長", "直列", "並列",
            "MIPS", "命令実行",
        ],
        range: (12, 18),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "信頼性設計",
                keywords: &["MTBF", "MTTR", "稼働率", "フォールトトレラント", "冗長", "フェールセーフ", "フェールソフト"],
            },
            Subcategory {
                name: "性能評価",
                keywords: &["スループット", "レスポンス", "ターンアラウンド", "MIPS", "ベンチマーク", "性能評価"],
            },
            Subcategory {
                name: "システム構成",
                keywords: &["デュプレックス", "クラスタ", "ホットスタンバイ", "負荷分散", "コールドスタンバイ", "直列", "並列"],
            },
        ],
    },
    Category {
        name: "ソフトウェア",
        keywords: &[
            "OS", "オペレーティングシステム", "カーネル", "プロセス",
            "スレッド", "スケジューリング", "デッドロック", "排他制御",
            "ページング", "セグメント", "ファイルシステム",
            "ミドルウェア", "デーモン", "タスク",
            "仮想マシン", "コンテナ",
            "ジョブ", "多重度", "ディスパッチ",
            "OSS", "オープンソース", "ライセンス",
            "スラッシング", "ページフォールト", "LRU",
            "セマフォ", "ミューテックス",
            "ラウンドロビン", "優先度",
        ],
        range: (15, 22),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "プロセス管理",
                keywords: &["プロセス", "スレッド", "スケジューリング", "デッドロック", "排他制御", "セマフォ", "ディスパッチ"],
            },
            Subcategory {
                name: "メモリ管理",
                keywords: &["ページング", "スラッシング", "仮想記憶", "LRU", "ページフォールト", "セグメント"],
            },
            Subcategory {
                name: "OS全般",
                keywords: &["OS", "カーネル", "ファイルシステム", "OSS", "ライセンス", "オペレーティング", "ミドルウェア", "ジョブ"],
            },
        ],
    },
    Category {
        name: "ハードウェア",
        keywords: &[
            "論理回路", "AND", "OR", "NOT", "NAND", "フリップフロップ",
            "A/D変換", "D/A変換", "センサー", "アクチュエータ",
            "組込み", "マイコン", "LED", "PWM", "タイマー",
            "回転", "モーター", "カウンタ",
            "消費電力", "半導体", "集積回路",
            "真理値表", "加算器", "乗算器",
        ],
        range: (19, 25),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "論理回路",
                keywords: &["AND", "OR", "NOT", "NAND", "フリップフロップ", "真理値表", "加算器", "論理回路"],
            },
            Subcategory {
                name: "入出力デバイス",
                keywords: &["センサー", "A/D変換", "D/A変換", "アクチュエータ", "LED", "PWM", "モーター"],
            },
            Subcategory {
                name: "組込みシステム",
                keywords: &["組込み", "マイコン", "IoT", "LPWA", "エッジ"],
            },
        ],
    },
    Category {
        name: "データベース",
        keywords: &[
            "データベース", "SQL", "関係", "テーブル", "正規化",
            "主キー", "外部キー", "ER図", "E-R", "インデックス",
            "トランザクション", "ACID", "ロック",
            "ビュー", "副問合せ", "結合", "射影", "選択",
            "NoSQL", "分散データベース", "レプリケーション",
            "B木", "B+木",
            "DBMS", "RDBMS", "スキーマ",
            "SELECT", "INSERT", "UPDATE", "DELETE",
            "GROUP BY", "ORDER BY", "HAVING",
            "関係代数", "関数従属", "候補キー",
        ],
        range: (25, 32),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "SQL",
                keywords: &["SELECT", "INSERT", "UPDATE", "DELETE", "GROUP BY", "ORDER BY", "HAVING", "副問合せ", "結合", "ビュー", "SQL"],
            },
            Subcategory {
                name: "データベース設計",
                keywords: &["正規化", "ER図", "E-R", "主キー", "外部キー", "関数従属", "スキーマ", "候補キー", "関係代数"],
            },
            Subcategory {
                name: "トランザクション",
                keywords: &["トランザクション", "ACID", "ロック", "同時実行", "直列化", "DBMS"],
            },
        ],
    },
    Category {
        name: "ネットワーク",
        keywords: &[
            "ネットワーク", "TCP", "IP", "UDP", "HTTP", "HTTPS",
            "DNS", "DHCP", "NAT", "プロキシ",
            "LAN", "WAN", "VLAN", "ルーティング", "スイッチ",
            "OSI", "レイヤ", "プロトコル", "パケット", "フレーム",
            "サブネット", "CIDR", "IPv4", "IPv6",
            "無線LAN", "Wi-Fi", "Bluetooth",
            "SMTP", "POP", "IMAP", "メール",
            "CSMA", "イーサネット", "帯域",
            "VPN", "SDN",
            "MACアドレス", "IPアドレス", "ポート番号",
            "SNMP", "NTP", "ARP",
        ],
        range: (30, 38),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "TCP/IPプロトコル",
                keywords: &["TCP", "IP", "UDP", "HTTP", "HTTPS", "DNS", "DHCP", "SMTP", "POP", "IMAP", "プロトコル"],
            },
            Subcategory {
                name: "ネットワーク構成",
                keywords: &["LAN", "WAN", "VLAN", "ルーティング", "サブネット", "VPN", "スイッチ", "ルータ"],
            },
            Subcategory {
                name: "通信技術",
                keywords: &["無線LAN", "Wi-Fi", "CSMA", "帯域", "MACアドレス", "ARP", "SNMP", "NTP", "イーサネット"],
            },
        ],
    },
    Category {
        name: "セキュリティ",
        keywords: &[
            "セキュリティ", "暗号", "認証", "署名", "証明書",
            "公開鍵", "秘密鍵", "共通鍵", "RSA", "AES",
            "ハッシュ", "SHA", "MD5", "ディジタル署名",
            "ファイアウォール", "IDS", "IPS", "WAF",
            "脆弱性", "マルウェア", "ウイルス", "ランサムウェア",
            "不正アクセス", "なりすまし", "フィッシング",
            "XSS", "SQLインジェクション", "CSRF",
            "ISMS", "情報セキュリティ",
            "CRL", "CA", "PKI", "TLS", "SSL",
            "バイオメトリクス", "二要素", "多要素",
            "フォレンジック", "アクセス制御",
            "サイバー", "攻撃", "CSIRT",
            "WPA", "耐タンパ", "ワンタイムパスワード",
            "ソーシャルエンジニアリング", "標的型",
            "チャレンジレスポンス", "Kerberos",
            "DoS", "DDoS", "ボットネット",
            "リスクアセスメント", "リスク分析",
        ],
        range: (36, 50),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "暗号技術",
                keywords: &["暗号", "公開鍵", "秘密鍵", "共通鍵", "RSA", "AES", "ハッシュ", "SHA", "MD5", "ディジタル署名"],
            },
            Subcategory {
                name: "認証・アクセス制御",
                keywords: &["認証", "PKI", "証明書", "バイオメトリクス", "ワンタイムパスワード", "チャレンジレスポンス", "Kerberos", "二要素", "多要素", "アクセス制御"],
            },
            Subcategory {
                name: "攻撃・脆弱性",
                keywords: &["マルウェア", "ウイルス", "XSS", "SQLインジェクション", "CSRF", "DoS", "DDoS", "フィッシング", "ランサムウェア", "ソーシャルエンジニアリング", "標的型", "ボットネット", "不正アクセス", "なりすまし"],
            },
            Subcategory {
                name: "セキュリティ管理",
                keywords: &["ISMS", "リスク", "CSIRT", "フォレンジック", "情報セキュリティ", "リスクアセスメント"],
            },
            Subcategory {
                name: "ネットワークセキュリティ",
                keywords: &["ファイアウォール", "IDS", "IPS", "WAF", "TLS", "SSL", "WPA", "耐タンパ"],
            },
        ],
    },
    Category {
        name: "システム開発技術",
        keywords: &[
            "ウォーターフォール", "アジャイル", "スクラム", "プロトタイピング",
            "要件定義", "設計", "テスト", "レビュー",
            "UML", "クラス図", "ユースケース", "シーケンス図",
            "モジュール", "結合度", "凝集度", "構造化",
            "ブラックボックス", "ホワイトボックス", "境界値",
            "単体テスト", "結合テスト", "システムテスト",
            "DFD", "状態遷移", "フローチャート",
            "カバレッジ", "回帰テスト",
            "エラー埋込み法",
            "ソフトウェア開発", "工程",
        ],
        range: (44, 50),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "開発手法",
                keywords: &["ウォーターフォール", "アジャイル", "スクラム", "プロトタイピング", "要件定義"],
            },
            Subcategory {
                name: "設計・モデリング",
                keywords: &["UML", "クラス図", "ユースケース", "シーケンス図", "DFD", "状態遷移", "モジュール", "結合度", "凝集度"],
            },
            Subcategory {
                name: "テスト技法",
                keywords: &["ブラックボックス", "ホワイトボックス", "境界値", "カバレッジ", "回帰テスト", "単体テスト", "結合テスト", "エラー埋込み"],
            },
        ],
    },
    Category {
        name: "ソフトウェア開発管理技術",
        keywords: &[
            "構成管理", "変更管理", "バージョン管理",
            "CMMI", "共通フレーム", "SLCP",
            "リポジトリ", "CASE", "リバースエンジニアリング",
            "再利用", "部品化", "マッシュアップ",
            "DevOps", "CI/CD",
            "リファクタリング",
        ],
        range: (48, 50),
        field: Field::Technology,
        subcategories: &[
            Subcategory {
                name: "構成管理",
                keywords: &["構成管理", "バージョン管理", "リポジトリ", "変更管理"],
            },
            Subcategory {
                name: "開発プロセス",
                keywords: &["CMMI", "共通フレーム", "SLCP", "DevOps", "CI/CD", "リファクタリング"],
            },
        ],
    },
    Category {
        name: "プロジェクトマネジメント",
        keywords: &[
            "プロジェクト", "WBS", "ガントチャート", "PERT",
            "クリティカルパス", "アローダイアグラム",
            "スコープ", "スケジュール", "コスト", "リスク",
            "EVM", "ファンクションポイント",
            "見積", "工数", "人月", "COCOMO",
            "ステークホルダ", "タックマン", "クラッシング",
            "ファストトラッキング",
            "プロジェクトマネジメント", "PMBOK",
        ],
        range: (51, 55),
        field: Field::Management,
        subcategories: &[
            Subcategory {
                name: "計画・スケジュール",
                keywords: &["WBS", "クリティカルパス", "アローダイアグラム", "PERT", "ガントチャート", "スケジュール", "ファストトラッキング", "クラッシング"],
            },
            Subcategory {
                name: "コスト・見積",
                keywords: &["EVM", "ファンクションポイント", "見積", "COCOMO", "工数", "人月", "コスト"],
            },
            Subcategory {
                name: "リスク・品質",
                keywords: &["リスク", "品質管理", "ステークホルダ", "タックマン", "スコープ"],
            },
        ],
    },
    Category {
        name: "サービスマネジメント",
        keywords: &[
            "ITIL", "SLA", "SLM", "サービスデスク",
            "インシデント", "問題管理", "変更管理", "リリース管理",
            "キャパシティ管理", "可用性管理",
            "サービスカタログ", "サービスレベル",
            "運用管理", "ヘルプデスク", "エスカレーション",
            "データセンター", "ファシリティ",
            "サービスマネジメント",
            "MTBSI", "FTA", "FMEA",
        ],
        range: (55, 58),
        field: Field::Management,
        subcategories: &[
            Subcategory {
                name: "ITIL・サービス運用",
                keywords: &["ITIL", "SLA", "サービスデスク", "エスカレーション", "サービスカタログ"],
            },
            Subcategory {
                name: "インシデント・問題管理",
                keywords: &["インシデント", "問題管理", "変更管理", "リリース管理"],
            },
            Subcategory {
                name: "可用性・キャパシティ",
                keywords: &["可用性管理", "キャパシティ管理", "ファシリティ", "データセンター"],
            },
        ],
    },
    Category {
        name: "システム監査",
        keywords: &[
            "監査", "内部統制", "コンプライアンス",
            "監査証跡", "監査手続", "監査報告書",
            "試査", "精査",
            "可監査性", "フォローアップ",
            "IT統制", "ITガバナンス",
            "システム監査",
        ],
        range: (58, 60),
        field: Field::Management,
        subcategories: &[
            Subcategory {
                name: "監査手法",
                keywords: &["監査手続", "試査", "精査", "サンプリング", "監査証跡", "監査報告"],
            },
            Subcategory {
                name: "内部統制・ガバナンス",
                keywords: &["内部統制", "ITガバナンス", "コンプライアンス", "IT統制", "フォローアップ"],
            },
        ],
    },
    Category {
        name: "システム戦略",
        keywords: &[
            "情報戦略", "IT投資", "EA", "エンタープライズ",
            "SOA", "BPR", "BPM", "業務プロセス",
            "情報システム", "システム化計画",
            "ポートフォリオ", "プログラムマネジメント",
            "DX", "デジタルトランスフォーメーション",
            "データ分析", "アソシエーション",
            "全体最適", "業務改善",
            "SoE", "SoR", "2025年の崖",
        ],
        range: (61, 65),
        field: Field::Strategy,
        subcategories: &[
            Subcategory {
                name: "情報システム戦略",
                keywords: &["EA", "SOA", "情報戦略", "全体最適", "エンタープライズ"],
            },
            Subcategory {
                name: "業務改善・DX",
                keywords: &["BPR", "BPM", "DX", "業務プロセス", "デジタルトランスフォーメーション", "業務改善"],
            },
            Subcategory {
                name: "データ活用",
                keywords: &["データ分析", "アソシエーション", "ポートフォリオ", "プログラムマネジメント"],
            },
        ],
    },
    Category {
        name: "システム企画",
        keywords: &[
            "RFP", "RFI", "調達",
            "提案書", "見積書", "契約",
            "フィージビリティ", "投資効果", "費用対効果",
            "PBP", "NPV", "IRR", "ROI",
            "要件定義", "要求分析",
        ],
        range: (63, 67),
        field: Field::Strategy,
        subcategories: &[
            Subcategory {
                name: "調達・RFP",
                keywords: &["RFP", "RFI", "調達", "提案書", "契約"],
            },
            Subcategory {
                name: "投資評価",
                keywords: &["ROI", "NPV", "PBP", "IRR", "フィージビリティ", "投資効果", "費用対効果"],
            },
        ],
    },
    Category {
        name: "経営戦略マネジメント",
        keywords: &[
            "経営戦略", "SWOT", "PPM", "バランススコアカード",
            "コアコンピタンス", "ブルーオーシャン",
            "M&A", "アライアンス", "アウトソーシング",
            "CRM", "SCM", "ERP", "SFA",
            "アンゾフ", "ポーター", "5フォース",
            "マーケティング", "4P", "4C",
            "ニッチ", "差別化", "コストリーダーシップ",
            "バリューチェーン", "プロダクトポートフォリオ",
            "BSC", "KPI", "CSF",
        ],
        range: (67, 72),
        field: Field::Strategy,
        subcategories: &[
            Subcategory {
                name: "経営分析フレームワーク",
                keywords: &["SWOT", "PPM", "ポーター", "バランススコアカード", "5フォース", "バリューチェーン", "コアコンピタンス", "BSC", "KPI", "CSF"],
            },
            Subcategory {
                name: "マーケティング",
                keywords: &["マーケティング", "4P", "4C", "ニッチ", "差別化", "コストリーダーシップ", "プロダクトポートフォリオ"],
            },
            Subcategory {
                name: "経営管理システム",
                keywords: &["CRM", "SCM", "ERP", "SFA", "M&A", "アライアンス", "アウトソーシング"],
            },
        ],
    },
    Category {
        name: "技術戦略マネジメント",
        keywords: &[
            "技術戦略", "MOT", "イノベーション",
            "ロードマップ", "技術ポートフォリオ",
            "パテント", "特許", "知的財産",
            "デファクトスタンダード", "技術経営",
            "キャズム", "ハイプ",
            "死の谷", "ダーウィンの海",
            "魔の川",
        ],
        range: (70, 73),
        field: Field::Strategy,
        subcategories: &[
            Subcategory {
                name: "イノベーション",
                keywords: &["イノベーション", "キャズム", "死の谷", "ダーウィンの海", "魔の川", "ハイプ"],
            },
            Subcategory {
                name: "技術経営",
                keywords: &["MOT", "ロードマップ", "デファクトスタンダード", "技術経営", "技術戦略", "特許", "知的財産"],
            },
        ],
    },
    Category {
        name: "ビジネスインダストリ",
        keywords: &[
            "RFID", "POS", "EOS", "EDI",
            "CAD", "CAM", "CAE", "CIM", "FMS",
            "セル生産", "かんばん", "ジャストインタイム",
            "MRP", "生産管理", "在庫管理",
            "PLM", "EC", "電子商取引",
            "コンカレントエンジニアリング",
            "LPWA", "エッジコンピューティング",
            "FinTech", "ブロックチェーン",
        ],
        range: (71, 76),
        field: Field::Strategy,
        subcategories: &[
            Subcategory {
                name: "生産管理",
                keywords: &["MRP", "セル生産", "かんばん", "ジャストインタイム", "生産管理", "在庫管理", "FMS"],
            },
            Subcategory {
                name: "eビジネス",
                keywords: &["EC", "電子商取引", "EDI", "FinTech", "ブロックチェーン"],
            },
            Subcategory {
                name: "業務システム",
                keywords: &["POS", "RFID", "CAD", "CAM", "CAE", "CIM", "PLM", "EOS"],
            },
        ],
    },
    Category {
        name: "企業活動",
        keywords: &[
            "損益", "貸借対照表", "キャッシュフロー",
            "利益", "売上", "原価", "固定費", "変動費",
            "損益分岐点", "線形計画法",
            "品質管理", "パレート", "管理図",
            "デシジョンツリー",
            "ABC分析", "PDCA", "自己資本",
            "財務", "会計", "減価償却",
            "リーダーシップ", "OJT",
        ],
        range: (74, 78),
        field: Field::Strategy,
        subcategories: &[
            Subcategory {
                name: "財務・会計",
                keywords: &["損益", "貸借対照表", "キャッシュフロー", "減価償却", "自己資本", "財務", "会計", "売上", "利益"],
            },
            Subcategory {
                name: "経営工学",
                keywords: &["損益分岐点", "線形計画法", "ABC分析", "パレート", "デシジョンツリー", "管理図", "固定費", "変動費"],
            },
            Subcategory {
                name: "組織・人材",
                keywords: &["リーダーシップ", "OJT", "PDCA", "品質管理"],
            },
        ],
    },
    Category {
        name: "法務",
        keywords: &[
            "著作権", "特許権", "意匠", "商標",
            "個人情報", "プライバシー", "不正競争",
            "労働", "派遣", "請負", "下請",
            "コンプライアンス", "ガバナンス",
            "不正アクセス禁止法", "電子署名法",
            "ソフトウェアライセンス", "GPL",
            "パワーハラスメント",
            "製造物責任", "PL法",
            "守秘義務", "秘密保持",
        ],
        range: (76, 80),
        field: Field::Strategy,
        subcategories: &[
            Subcategory {
                name: "知的財産権",
                keywords: &["著作権", "特許権", "意匠", "商標"],
            },
            Subcategory {
                name: "労働・契約",
                keywords: &["労働", "派遣", "請負", "下請", "パワーハラスメント", "守秘義務"],
            },
            Subcategory {
                name: "IT関連法規",
                keywords: &["個人情報", "不正アクセス禁止法", "不正競争", "GPL", "ソフトウェアライセンス", "電子署名法", "製造物責任"],
            },
        ],
    },
];
