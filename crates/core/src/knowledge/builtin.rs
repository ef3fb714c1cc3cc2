//! Records shipped with the service: common gastro-intestinal conditions.

use super::DiseaseRecord;

/// Raw rows of the built-in table as `(identifier, recommendation, treatment)`.
const RECORDS: &[(&str, &str, &str)] = &[
    (
        "spontaneous_rupture_of_oesophagus",
        "Seek emergency medical attention immediately. Do not eat or drink anything, as this can worsen the condition. Remain in an upright position to reduce discomfort. Emergency surgical intervention is often required, so immediate hospitalization is critical.",
        "Surgical repair of the esophageal rupture is the primary treatment. Patients require IV fluids, broad-spectrum antibiotics to prevent infections, and pain management. In severe cases, a feeding tube or total parenteral nutrition may be necessary until the esophagus heals.",
    ),
    (
        "oesophagitis",
        "Avoid foods and beverages that can trigger or worsen symptoms, such as acidic, spicy, or very hot foods. Elevate the head while sleeping to prevent acid reflux. Quit smoking and alcohol consumption, as they can irritate the esophagus. Manage stress, as it can contribute to symptoms.",
        "Proton pump inhibitors (PPIs) such as omeprazole or lansoprazole are commonly prescribed to reduce acid production. Antacids can provide temporary relief, while H2 receptor blockers like ranitidine may also help. If caused by an infection, antifungal or antiviral medications may be needed.",
    ),
    (
        "gastric_outlet_obstruction",
        "Stay hydrated and avoid consuming solid foods until symptoms improve. If vomiting occurs frequently, electrolyte replacement may be necessary. Seek medical evaluation to determine the underlying cause, which could include peptic ulcers, tumors, or scarring from chronic inflammation.",
        "Treatment depends on the cause. If due to peptic ulcer disease, PPIs and H. pylori eradication therapy may be needed. Endoscopic dilation or stent placement can help open the obstruction. In severe cases, surgical intervention such as gastrojejunostomy may be required.",
    ),
    (
        "gastritis",
        "Avoid the use of NSAIDs like ibuprofen and aspirin, as they can irritate the stomach lining. Limit alcohol consumption and avoid spicy or highly acidic foods. Eat smaller, more frequent meals rather than large meals to reduce stomach irritation. Manage stress through relaxation techniques like meditation or yoga.",
        "Treatment depends on the cause. If due to H. pylori infection, antibiotics such as amoxicillin and clarithromycin are used along with PPIs. Antacids and H2 blockers can help reduce acid production. In cases of autoimmune gastritis, vitamin B12 supplementation may be required.",
    ),
    (
        "gastric_ulcer",
        "Avoid known irritants such as caffeine, alcohol, and smoking. Eat bland, easily digestible foods to minimize stomach irritation. Manage stress effectively, as it can contribute to ulcer formation. Maintain a regular eating schedule and avoid long gaps between meals.",
        "Proton pump inhibitors (PPIs) and H2 receptor blockers are commonly used to reduce acid production and promote healing. If caused by H. pylori infection, a combination of antibiotics and acid suppressors is prescribed. In severe cases, endoscopic therapy or surgery may be required to stop bleeding or repair the ulcer.",
    ),
    (
        "intussusception_of_small_intestine",
        "Seek emergency medical care immediately, as this condition can lead to bowel obstruction and severe complications. Avoid eating or drinking until medical evaluation is done. Symptoms such as severe abdominal pain, vomiting, and bloody stools require urgent attention.",
        "Non-surgical reduction using an air or barium enema is the first-line treatment in children. If unsuccessful or if there are signs of bowel perforation, surgery is required to manually reduce the intussusception or remove the affected portion of the intestine.",
    ),
    (
        "intussusception_of_large_intestine",
        "Seek immediate medical evaluation if experiencing severe abdominal pain, vomiting, or bloody stools. Avoid consuming food or liquids until a doctor assesses the condition. Delay in treatment can lead to serious complications, including bowel perforation.",
        "Surgical intervention is often required to correct the intussusception. In some cases, an air enema may be attempted, but surgery is more commonly needed for adults. Supportive care includes IV fluids, pain management, and close monitoring for complications.",
    ),
    (
        "appendicitis",
        "If experiencing symptoms like sharp lower-right abdominal pain, nausea, or fever, seek immediate medical attention. Avoid eating or drinking, as surgery may be needed. Applying heat to the abdomen or taking painkillers is not recommended before diagnosis.",
        "Surgical removal of the appendix (appendectomy) is the standard treatment. In some cases, antibiotics alone may be attempted if surgery is not immediately available. Post-surgery, patients should follow a light diet and avoid heavy physical activity until fully healed.",
    ),
    (
        "cholelithiasis",
        "Adopt a low-fat diet to reduce gallbladder stress. Maintain a healthy weight, as obesity increases the risk of gallstones. Avoid rapid weight loss, as it can contribute to gallstone formation. Stay hydrated and engage in regular physical activity.",
        "Surgical removal of the gallbladder (cholecystectomy) is the definitive treatment for symptomatic gallstones. If surgery is not an option, bile acid medications such as ursodeoxycholic acid may be used to dissolve stones. Pain management with NSAIDs or opioids may be needed temporarily.",
    ),
    (
        "acute_pancreatitis",
        "Refrain from eating or drinking to allow the pancreas to rest. Seek urgent medical care, as pancreatitis can cause serious complications. Avoid alcohol consumption and smoking. Stay hydrated with IV fluids under medical supervision.",
        "Initial treatment includes IV fluids, pain management, and bowel rest (fasting). In cases caused by gallstones, endoscopic removal may be necessary. If infection develops, antibiotics are prescribed. Severe cases may require hospitalization in the ICU with advanced supportive care.",
    ),
];

/// The built-in table as owned records, ready for `KnowledgeBase::load`.
pub(crate) fn records() -> Vec<DiseaseRecord> {
    RECORDS
        .iter()
        .map(|(identifier, recommendation, treatment)| DiseaseRecord {
            identifier: (*identifier).to_string(),
            recommendation: (*recommendation).to_string(),
            treatment: (*treatment).to_string(),
        })
        .collect()
}
