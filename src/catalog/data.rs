//! Compiled-in recipe tables.

use super::{Category, Recipe};

struct Seed {
    name: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
}

/// Materializes the built-in recipes for one category.
pub(super) fn recipes(category: Category) -> Vec<Recipe> {
    let table = match category {
        Category::Breakfast => BREAKFAST,
        Category::Meat => MEAT,
        Category::Veg => VEG,
        Category::Soup => SOUP,
    };
    table
        .iter()
        .map(|seed| Recipe::new(seed.name, seed.description, seed.ingredients, seed.steps))
        .collect()
}

const BREAKFAST: &[Seed] = &[
    Seed {
        name: "番茄鸡蛋面",
        description: "酸甜开胃的一碗热汤面，十分钟上桌。",
        ingredients: &["挂面 100克", "番茄 1个", "鸡蛋 1个", "葱花 少许", "盐 适量"],
        steps: &[
            "番茄切块，鸡蛋打散。",
            "热油炒散鸡蛋盛出，再下番茄炒出汁。",
            "加水烧开后下面条，煮熟后倒回鸡蛋，加盐撒葱花。",
        ],
    },
    Seed {
        name: "鸡蛋灌饼",
        description: "外酥里嫩的街头早餐，卷上生菜更清爽。",
        ingredients: &["面粉 200克", "鸡蛋 2个", "生菜 2片", "甜面酱 1勺", "葱花 少许"],
        steps: &[
            "面粉加温水揉成面团，醒20分钟。",
            "擀成饼坯，包入油酥后再擀开。",
            "烙至鼓起，挑开口灌入蛋液，翻面烙熟。",
            "刷甜面酱，卷入生菜。",
        ],
    },
    Seed {
        name: "皮蛋瘦肉粥",
        description: "绵密顺滑的广式粥，暖胃又管饱。",
        ingredients: &["大米 100克", "皮蛋 2个", "猪里脊 100克", "姜丝 少许", "盐 适量"],
        steps: &[
            "大米提前浸泡30分钟，瘦肉切丝用盐腌制。",
            "大米加水大火煮开转小火熬40分钟。",
            "下皮蛋丁、肉丝和姜丝，再煮5分钟调味。",
        ],
    },
    Seed {
        name: "小米南瓜粥",
        description: "香甜软糯，适合清淡的早晨。",
        ingredients: &["小米 80克", "南瓜 200克", "冰糖 少许"],
        steps: &[
            "南瓜去皮切小块，小米淘洗干净。",
            "一同入锅加水，小火熬30分钟至浓稠。",
            "按口味加冰糖。",
        ],
    },
    Seed {
        name: "豆浆配油条",
        description: "经典中式早餐组合。",
        ingredients: &["黄豆 80克", "面粉 250克", "酵母 3克", "白糖 适量"],
        steps: &[
            "黄豆泡发后加水打成豆浆，煮沸5分钟。",
            "面粉加酵母和水揉成软面团，冷藏发酵一夜。",
            "切条两两叠压，入热油炸至金黄。",
        ],
    },
    Seed {
        name: "韭菜盒子",
        description: "皮薄馅大，鲜香扑鼻。",
        ingredients: &["面粉 300克", "韭菜 250克", "鸡蛋 2个", "虾皮 10克", "盐 适量"],
        steps: &[
            "面粉加热水烫面，揉匀醒面。",
            "鸡蛋炒碎，与韭菜、虾皮拌成馅。",
            "擀皮包馅捏紧花边，小火煎至两面金黄。",
        ],
    },
    Seed {
        name: "香菇鸡肉粥",
        description: "鲜香浓郁，营养均衡。",
        ingredients: &["大米 100克", "鸡胸肉 150克", "香菇 4朵", "姜丝 少许", "盐 适量"],
        steps: &[
            "鸡胸肉切丁，香菇切片。",
            "大米熬成稀粥，加入鸡丁和香菇。",
            "再煮10分钟，加姜丝和盐调味。",
        ],
    },
    Seed {
        name: "玉米猪肉蒸饺",
        description: "清甜多汁，一口一个。",
        ingredients: &["饺子皮 20张", "玉米粒 150克", "猪肉末 200克", "胡萝卜 半根", "生抽 1勺"],
        steps: &[
            "胡萝卜切碎，与玉米粒、肉末和生抽拌匀。",
            "包成饺子。",
            "水开后上锅蒸12分钟。",
        ],
    },
];

const MEAT: &[Seed] = &[
    Seed {
        name: "红烧肉",
        description: "肥而不腻，入口即化的家常硬菜。",
        ingredients: &["五花肉 500克", "冰糖 30克", "生抽 2勺", "老抽 1勺", "八角 2个", "姜片 3片"],
        steps: &[
            "五花肉切块焯水。",
            "小火炒冰糖至焦糖色，下肉块翻炒上色。",
            "加生抽、老抽、八角、姜片和热水，小火炖60分钟。",
            "大火收汁。",
        ],
    },
    Seed {
        name: "宫保鸡丁",
        description: "麻辣鲜香，花生酥脆。",
        ingredients: &["鸡胸肉 300克", "花生米 50克", "干辣椒 10个", "葱段 适量", "花椒 1小把"],
        steps: &[
            "鸡肉切丁上浆腌制。",
            "花生米炸酥备用。",
            "爆香干辣椒和花椒，下鸡丁滑炒，倒入碗汁。",
            "出锅前加花生米和葱段。",
        ],
    },
    Seed {
        name: "鱼香肉丝",
        description: "咸甜酸辣兼备的川菜代表。",
        ingredients: &["猪里脊 250克", "木耳 50克", "胡萝卜 半根", "青笋 半根", "泡椒 2勺"],
        steps: &[
            "肉丝上浆，配菜切丝。",
            "调好鱼香汁。",
            "滑炒肉丝，下泡椒炒红油，加配菜和鱼香汁翻匀。",
        ],
    },
    Seed {
        name: "青椒肉丝",
        description: "简单快手的下饭菜。",
        ingredients: &["猪里脊 200克", "青椒 3个", "生抽 1勺", "淀粉 1小勺"],
        steps: &[
            "肉丝用生抽和淀粉抓匀。",
            "大火滑炒肉丝至变色盛出。",
            "炒青椒丝至断生，倒回肉丝翻炒调味。",
        ],
    },
    Seed {
        name: "糖醋排骨",
        description: "酸甜适口，老少皆宜。",
        ingredients: &["排骨 500克", "白糖 3勺", "香醋 3勺", "生抽 1勺", "料酒 1勺"],
        steps: &[
            "排骨焯水后煎至两面金黄。",
            "加料酒、生抽、白糖、香醋和清水，小火焖30分钟。",
            "大火收汁至浓稠。",
        ],
    },
    Seed {
        name: "土豆炖牛肉",
        description: "软烂入味，汤汁拌饭一绝。",
        ingredients: &["牛腩 500克", "土豆 2个", "胡萝卜 1根", "八角 2个", "生抽 2勺"],
        steps: &[
            "牛腩切块焯水。",
            "炒香八角，下牛腩翻炒，加生抽和热水炖90分钟。",
            "加入土豆和胡萝卜块，再炖20分钟。",
        ],
    },
    Seed {
        name: "可乐鸡翅",
        description: "甜香浓郁，零失败的家常菜。",
        ingredients: &["鸡翅中 10个", "可乐 1罐", "生抽 2勺", "姜片 3片"],
        steps: &[
            "鸡翅两面划刀，焯水。",
            "煎至两面金黄，加姜片、生抽和可乐。",
            "中火焖15分钟后收汁。",
        ],
    },
    Seed {
        name: "清蒸鲈鱼",
        description: "鲜嫩清淡，保留鱼肉本味。",
        ingredients: &["鲈鱼 1条", "葱丝 适量", "姜丝 适量", "蒸鱼豉油 3勺"],
        steps: &[
            "鲈鱼处理干净，铺姜丝。",
            "水开后大火蒸8分钟，倒掉蒸出的水。",
            "铺葱丝，淋蒸鱼豉油和热油。",
        ],
    },
    Seed {
        name: "油焖大虾",
        description: "红亮鲜甜，宴客必备。",
        ingredients: &["大虾 500克", "番茄酱 1勺", "葱段 适量", "白糖 1小勺"],
        steps: &[
            "大虾剪须去虾线。",
            "煎至变色，压出虾油。",
            "加番茄酱、白糖和少许水焖3分钟，撒葱段。",
        ],
    },
    Seed {
        name: "小炒黄牛肉",
        description: "湘味十足，香辣嫩滑。",
        ingredients: &["黄牛肉 300克", "小米辣 5个", "芹菜 2根", "蒜末 适量"],
        steps: &[
            "牛肉逆纹切薄片腌制。",
            "大火快炒牛肉至八成熟盛出。",
            "爆香蒜末和小米辣，加芹菜段和牛肉翻炒。",
        ],
    },
];

const VEG: &[Seed] = &[
    Seed {
        name: "西红柿炒蛋",
        description: "国民家常菜，酸甜下饭。",
        ingredients: &["西红柿", "鸡蛋 3个", "葱花 少许", "白糖 1小勺", "盐 适量"],
        steps: &[
            "西红柿切块，鸡蛋打散。",
            "热油炒蛋至凝固盛出。",
            "炒西红柿出汁，加糖和盐，倒回鸡蛋翻匀。",
        ],
    },
    Seed {
        name: "酸辣土豆丝",
        description: "爽脆开胃，百吃不厌。",
        ingredients: &["土豆 2个", "干辣椒 3个", "白醋 2勺", "花椒 少许"],
        steps: &[
            "土豆切细丝，清水冲去淀粉。",
            "爆香花椒和干辣椒。",
            "大火快炒土豆丝，沿锅边淋白醋，加盐出锅。",
        ],
    },
    Seed {
        name: "地三鲜",
        description: "东北名菜，茄子软糯土豆香。",
        ingredients: &["茄子 1个", "土豆 1个", "青椒 2个", "蒜末 适量", "生抽 1勺"],
        steps: &[
            "茄子、土豆切滚刀块，分别过油。",
            "爆香蒜末，下全部食材和青椒。",
            "淋生抽和少许水淀粉翻匀。",
        ],
    },
    Seed {
        name: "麻婆豆腐",
        description: "麻辣烫嫩，一勺浇饭。",
        ingredients: &["嫩豆腐 1块", "猪肉末 100克", "郫县豆瓣酱 1勺", "花椒粉 少许"],
        steps: &[
            "豆腐切块，淡盐水焯烫。",
            "炒散肉末，下豆瓣酱炒出红油。",
            "加水和豆腐煮5分钟，勾芡撒花椒粉。",
        ],
    },
    Seed {
        name: "蒜蓉西兰花",
        description: "清爽健康的快手素菜。",
        ingredients: &["西兰花 1棵", "大蒜 5瓣", "蚝油 1勺"],
        steps: &[
            "西兰花掰小朵，焯水1分钟。",
            "爆香蒜蓉，下西兰花和蚝油翻炒。",
        ],
    },
    Seed {
        name: "手撕包菜",
        description: "锅气十足，香辣脆爽。",
        ingredients: &["包菜 半颗", "干辣椒 5个", "蒜片 适量", "生抽 1勺", "香醋 1勺"],
        steps: &[
            "包菜手撕成片。",
            "爆香蒜片和干辣椒，大火炒包菜。",
            "沿锅边淋香醋和生抽。",
        ],
    },
    Seed {
        name: "干煸四季豆",
        description: "干香入味，越嚼越香。",
        ingredients: &["四季豆 400克", "猪肉末 50克", "干辣椒 5个", "蒜末 适量"],
        steps: &[
            "四季豆掐段，小火煸至表皮起皱。",
            "炒香肉末、干辣椒和蒜末。",
            "倒回四季豆翻炒调味。",
        ],
    },
    Seed {
        name: "清炒上海青",
        description: "最简单的一盘绿色。",
        ingredients: &["上海青 400克", "蒜末 适量", "盐 适量"],
        steps: &["上海青洗净对半切。", "爆香蒜末，大火快炒，加盐出锅。"],
    },
    Seed {
        name: "香菇油菜",
        description: "鲜香清淡，营养丰富。",
        ingredients: &["香菇 6朵", "小油菜 300克", "蚝油 1勺"],
        steps: &[
            "油菜焯水摆盘。",
            "香菇切片炒软，加蚝油和少许水煮2分钟。",
            "浇在油菜上。",
        ],
    },
    Seed {
        name: "凉拌黄瓜",
        description: "夏日必备的爽口凉菜。",
        ingredients: &["黄瓜 2根", "蒜末 适量", "香醋 2勺", "辣椒油 1勺"],
        steps: &["黄瓜拍碎切段。", "加蒜末、香醋、辣椒油和盐拌匀。"],
    },
];

const SOUP: &[Seed] = &[
    Seed {
        name: "番茄鸡蛋汤",
        description: "五分钟出锅的家常汤。",
        ingredients: &["番茄 2个", "鸡蛋 2个", "葱花 少许", "香油 几滴"],
        steps: &[
            "番茄切块炒出汁，加水烧开。",
            "淋入蛋液成蛋花。",
            "加盐，滴香油撒葱花。",
        ],
    },
    Seed {
        name: "紫菜蛋花汤",
        description: "清淡鲜美，配什么菜都合适。",
        ingredients: &["紫菜 10克", "鸡蛋 1个", "虾皮 少许", "香油 几滴"],
        steps: &["水开后下紫菜和虾皮。", "淋入蛋液，加盐和香油。"],
    },
    Seed {
        name: "冬瓜排骨汤",
        description: "清润解腻，汤色清亮。",
        ingredients: &["排骨 400克", "冬瓜 500克", "姜片 3片"],
        steps: &[
            "排骨焯水，加姜片和清水炖60分钟。",
            "加入冬瓜块再煮15分钟，加盐调味。",
        ],
    },
    Seed {
        name: "玉米排骨汤",
        description: "清甜滋补，全家都爱。",
        ingredients: &["排骨 400克", "玉米 2根", "胡萝卜 1根", "姜片 2片"],
        steps: &[
            "排骨焯水。",
            "与玉米段、胡萝卜块和姜片一起炖90分钟。",
            "加盐调味。",
        ],
    },
    Seed {
        name: "罗宋汤",
        description: "酸甜浓郁的海派西餐汤。",
        ingredients: &["牛肉 300克", "番茄 2个", "土豆 1个", "洋葱 1个", "卷心菜 四分之一颗"],
        steps: &[
            "牛肉切块焯水，加水炖60分钟。",
            "炒香洋葱和番茄，连同土豆、卷心菜倒入汤锅。",
            "再炖30分钟，调味。",
        ],
    },
    Seed {
        name: "酸辣汤",
        description: "酸辣开胃，暖身暖胃。",
        ingredients: &["嫩豆腐 半块", "木耳 30克", "鸡蛋 1个", "白胡椒粉 1小勺", "香醋 2勺"],
        steps: &[
            "豆腐、木耳切丝，水开后下锅。",
            "勾薄芡，淋入蛋液。",
            "关火加白胡椒粉和香醋。",
        ],
    },
    Seed {
        name: "海带豆腐汤",
        description: "清淡鲜美的家常汤。",
        ingredients: &["海带 100克", "嫩豆腐 1块", "姜片 2片"],
        steps: &["海带泡发切丝，豆腐切块。", "一同煮15分钟，加盐调味。"],
    },
    Seed {
        name: "鲫鱼豆腐汤",
        description: "汤色奶白，鲜香浓郁。",
        ingredients: &["鲫鱼 1条", "嫩豆腐 1块", "姜片 3片", "葱段 适量"],
        steps: &[
            "鲫鱼煎至两面金黄。",
            "冲入开水大火滚煮至汤色奶白。",
            "加豆腐再煮10分钟，加盐撒葱段。",
        ],
    },
];
